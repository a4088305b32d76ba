use serde::{Deserialize, Serialize};

use crate::comics::enums::visual_style::VisualStyle;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub visual_style: VisualStyle,
}
