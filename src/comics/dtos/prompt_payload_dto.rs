use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PromptPayloadDto {
    pub prompt: String,
}
