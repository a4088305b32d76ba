use serde::Deserialize;
use validator::Validate;

use crate::comics::{enums::visual_style::VisualStyle, models::panel_description::PanelDescription};

#[derive(Debug, Deserialize, Validate)]
pub struct ComicPagePayloadDto {
    #[validate(length(min = 1, message = "descriptions must contain at least one panel."))]
    pub descriptions: Vec<PanelDescription>,
    #[serde(default)]
    pub style: VisualStyle,
}
