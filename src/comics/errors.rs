use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ComicsApiError {
    InvalidAction,
    InvalidPayload(String),
    EmptyStory,
    EmptyPrompt,
    InappropriateStory,
    InappropriatePrompt,
    StoryGenerationFailed,
    StoryboardUnreadable,
    EmptyStoryboard,
    RequestBlocked(String),
    NoCandidates,
    GenerationStopped(String),
    NoContentParts,
    NoImage,
    InvalidImageData,
    InvalidMimeType,
}

impl ComicsApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::InvalidAction => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid action specified".to_string(),
            },
            Self::InvalidPayload(reason) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Invalid payload: {}", reason),
            },
            Self::EmptyStory => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please write a story first.".to_string(),
            },
            Self::EmptyPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please enter a story idea first.".to_string(),
            },
            Self::InappropriateStory => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "The story seems to contain inappropriate content. Please revise your story to proceed.".to_string(),
            },
            Self::InappropriatePrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "The provided prompt seems to contain inappropriate content. Please try a different idea.".to_string(),
            },
            Self::StoryGenerationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to generate a story. Please try a different prompt.".to_string(),
            },
            Self::StoryboardUnreadable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to parse the storyboard returned by the model.".to_string(),
            },
            Self::EmptyStoryboard => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Could not generate a storyboard from the provided text.".to_string(),
            },
            Self::RequestBlocked(reason) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!(
                    "Request was blocked. Reason: {}. This is often due to content safety filters.",
                    reason
                ),
            },
            Self::NoCandidates => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The model did not return any candidates. This could be due to a content safety filter blocking the request.".to_string(),
            },
            Self::GenerationStopped(reason) => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!(
                    "Image generation failed. Reason: {}. This is often caused by content safety filters.",
                    reason
                ),
            },
            Self::NoContentParts => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "The model's response did not contain any content parts. This may be due to content safety filters or an internal error.".to_string(),
            },
            Self::NoImage => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "No image was generated by the model. The response may have contained only text.".to_string(),
            },
            Self::InvalidImageData => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Image data is not valid base64.".to_string(),
            },
            Self::InvalidMimeType => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "mimeType must be an image type.".to_string(),
            },
        }
    }
}
