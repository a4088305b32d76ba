use serde::Deserialize;
use validator::Validate;

use crate::comics::enums::visual_style::VisualStyle;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateComicDto {
    #[validate(length(
        min = 1,
        max = 20000,
        message = "story must be between 1 and 20000 characters."
    ))]
    pub story: String,
    #[serde(default)]
    pub style: VisualStyle,
}
