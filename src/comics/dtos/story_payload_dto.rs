use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StoryPayloadDto {
    pub story: String,
}
