use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderValue},
    StatusCode,
};

use crate::{
    app::models::api_error::ApiError,
    gemini::{
        enums::response_modality::ResponseModality,
        errors::GeminiApiError,
        gateway::ModelGateway,
        models::text_options::TextOptions,
        structs::{
            gemini_error_response::GeminiErrorResponse,
            generate_content_request::{GenerateContentRequest, GenerationConfig},
            generate_content_response::GenerateContentResponse,
        },
    },
};

use super::config::Config;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone, Debug)]
pub struct GeminiClient {
    pub config: Config,
    pub http_client: reqwest::Client,
    api_key: HeaderValue,
}

impl GeminiClient {
    pub fn new(config: Config, http_client: Option<reqwest::Client>) -> Result<GeminiClient, ApiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiApiError::MissingApiKey.value());
        }

        let Ok(mut api_key) = HeaderValue::from_str(config.api_key.trim()) else {
            return Err(GeminiApiError::InvalidApiKey.value());
        };
        api_key.set_sensitive(true);

        let http_client = match http_client {
            Some(http_client) => http_client,
            None => match reqwest::ClientBuilder::new().timeout(config.timeout).build() {
                Ok(http_client) => http_client,
                Err(e) => {
                    tracing::error!(%e);
                    return Err(GeminiApiError::ClientBuildFailed.value());
                }
            },
        };

        Ok(GeminiClient {
            config,
            http_client,
            api_key,
        })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(API_KEY_HEADER, self.api_key.clone());

        let result = self
            .http_client
            .post(self.config.generate_content_url(model))
            .headers(headers)
            .json(request)
            .send()
            .await;

        match result {
            Ok(res) => {
                let status = res.status();

                match res.text().await {
                    Ok(text) => {
                        if !status.is_success() {
                            tracing::error!(model, %status, %text, "generate_content rejected");
                            return Err(upstream_error(status, &text));
                        }

                        match serde_json::from_str(&text) {
                            Ok(response) => Ok(response),
                            Err(e) => {
                                tracing::error!(model, %e, %text, "generate_content undecodable");
                                Err(GeminiApiError::InvalidResponse.value())
                            }
                        }
                    }
                    Err(e) => {
                        tracing::error!(model, %e);
                        Err(GeminiApiError::InvalidResponse.value())
                    }
                }
            }
            Err(e) => {
                tracing::error!("generate_content, {:?}", e);
                Err(GeminiApiError::Unreachable.value())
            }
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate_text(
        &self,
        instruction: &str,
        input: &str,
        options: &TextOptions,
    ) -> Result<String, ApiError> {
        let request = GenerateContentRequest::from_text(
            format!("{}\n\n{}", instruction, input),
            GenerationConfig::from_text_options(options),
        );

        let response = self
            .generate_content(&self.config.text_model, &request)
            .await?;

        Ok(response.text())
    }

    async fn generate_composite(
        &self,
        prompt: &str,
        modalities: &[ResponseModality],
    ) -> Result<GenerateContentResponse, ApiError> {
        let request = GenerateContentRequest::from_text(
            prompt.to_string(),
            Some(GenerationConfig::from_modalities(modalities)),
        );

        self.generate_content(&self.config.image_model, &request)
            .await
    }
}

fn upstream_error(status: StatusCode, text: &str) -> ApiError {
    let message = match serde_json::from_str::<GeminiErrorResponse>(text) {
        Ok(error_response) => format!("Model request failed: {}", error_response.error.message),
        Err(_) => format!("Model request failed with status {}.", status.as_u16()),
    };

    ApiError::internal(message)
}
