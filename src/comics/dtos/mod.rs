pub mod comic_page_payload_dto;
pub mod download_comic_page_dto;
pub mod generate_comic_dto;
pub mod generate_story_dto;
pub mod proxy_request_dto;
pub mod prompt_payload_dto;
pub mod story_payload_dto;
pub mod text_payload_dto;
