use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TextPayloadDto {
    pub text: String,
}
