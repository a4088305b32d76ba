use serde::Serialize;

use super::{comic_page::ComicPage, panel_description::PanelDescription};

#[derive(Debug, Clone, Serialize)]
pub struct Comic {
    pub panels: Vec<PanelDescription>,
    pub page: ComicPage,
}
