use serde::{Deserialize, Serialize};

/// One narrative beat of the comic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescription {
    pub panel: u32,
    pub visual_description: String,
    pub caption: String,
}
