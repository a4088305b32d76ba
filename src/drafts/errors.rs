use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum DraftsApiError {
    ReadFailed,
    WriteFailed,
    DeleteFailed,
}

impl DraftsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ReadFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to load the saved draft.".to_string(),
            },
            Self::WriteFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to save the draft.".to_string(),
            },
            Self::DeleteFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to clear the draft.".to_string(),
            },
        }
    }
}
