use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::{
    enums::response_modality::ResponseModality, models::text_options::TextOptions,
    structs::generate_content_response::GenerateContentResponse,
};

/// The hosted generative model, seen as a capability.
///
/// Every pipeline step talks to the model through this trait so that the
/// orchestration can run against a substitute in tests.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Runs the text model over `instruction` followed by `input` and returns
    /// the reply text, or an empty string when the model produced none.
    async fn generate_text(
        &self,
        instruction: &str,
        input: &str,
        options: &TextOptions,
    ) -> Result<String, ApiError>;

    /// Runs the image model and hands back the whole response for the caller
    /// to inspect.
    async fn generate_composite(
        &self,
        prompt: &str,
        modalities: &[ResponseModality],
    ) -> Result<GenerateContentResponse, ApiError>;
}
