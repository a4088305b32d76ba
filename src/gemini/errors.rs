use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GeminiApiError {
    MissingApiKey,
    InvalidApiKey,
    ClientBuildFailed,
    Unreachable,
    InvalidResponse,
}

impl GeminiApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "GEMINI_API_KEY environment variable is not configured on the server."
                    .to_string(),
            },
            Self::InvalidApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "GEMINI_API_KEY contains characters that cannot be sent in a header."
                    .to_string(),
            },
            Self::ClientBuildFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to build the model HTTP client.".to_string(),
            },
            Self::Unreachable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to reach the model.".to_string(),
            },
            Self::InvalidResponse => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The model returned a response that could not be read.".to_string(),
            },
        }
    }
}
