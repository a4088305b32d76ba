pub mod gemini_error_response;
pub mod generate_content_request;
pub mod generate_content_response;
