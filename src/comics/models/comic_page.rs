use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    app::models::api_error::ApiError, comics::errors::ComicsApiError,
    gemini::structs::generate_content_response::InlineData,
};

/// The single rendered page, kept base64-encoded as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicPage {
    pub image_base64: String,
    pub mime_type: String,
}

impl ComicPage {
    pub fn from_inline_data(inline_data: &InlineData) -> Self {
        Self {
            image_base64: inline_data.data.to_string(),
            mime_type: inline_data.mime_type.to_string(),
        }
    }

    pub fn bytes(&self) -> Result<Bytes, ApiError> {
        match base64::decode(&self.image_base64) {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(e) => {
                tracing::debug!(%e);
                Err(ComicsApiError::InvalidImageData.value())
            }
        }
    }
}
