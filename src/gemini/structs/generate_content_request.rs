// https://ai.google.dev/api/generate-content#method:-models.generatecontent

use serde::Serialize;
use serde_json::Value;

use crate::gemini::{enums::response_modality::ResponseModality, models::text_options::TextOptions};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<ResponseModality>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub thinking_budget: u32,
}

impl GenerateContentRequest {
    pub fn from_text(text: String, generation_config: Option<GenerationConfig>) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text }],
            }],
            generation_config,
        }
    }
}

impl GenerationConfig {
    pub fn from_text_options(options: &TextOptions) -> Option<Self> {
        let config = Self {
            max_output_tokens: options.max_output_tokens,
            thinking_config: options
                .disable_thinking
                .then_some(ThinkingConfig { thinking_budget: 0 }),
            response_mime_type: options
                .response_schema
                .as_ref()
                .map(|_| mime::APPLICATION_JSON.to_string()),
            response_schema: options.response_schema.clone(),
            response_modalities: None,
        };

        if config.is_empty() {
            None
        } else {
            Some(config)
        }
    }

    pub fn from_modalities(modalities: &[ResponseModality]) -> Self {
        Self {
            response_modalities: Some(modalities.to_vec()),
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.max_output_tokens.is_none()
            && self.thinking_config.is_none()
            && self.response_mime_type.is_none()
            && self.response_schema.is_none()
            && self.response_modalities.is_none()
    }
}
