pub mod comic;
pub mod comic_page;
pub mod panel_description;
