use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ProxyRequestDto {
    pub action: String,
    #[serde(default)]
    pub payload: Value,
}
