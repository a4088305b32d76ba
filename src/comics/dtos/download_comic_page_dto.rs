use serde::Deserialize;

use crate::comics::models::comic_page::ComicPage;

#[derive(Debug, Deserialize)]
pub struct DownloadComicPageDto {
    pub page: ComicPage,
}
