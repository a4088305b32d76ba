use axum::{extract::State, http::StatusCode, Json};

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{models::draft::Draft, service};

pub async fn get_draft(State(state): State<AppState>) -> Result<Json<Draft>, ApiError> {
    match service::get_draft(&state.drafts).await {
        Ok(draft) => Ok(Json(draft)),
        Err(e) => Err(e),
    }
}

pub async fn save_draft(
    State(state): State<AppState>,
    JsonFromRequest(draft): JsonFromRequest<Draft>,
) -> Result<Json<Draft>, ApiError> {
    match service::save_draft(&draft, &state.drafts).await {
        Ok(draft) => Ok(Json(draft)),
        Err(e) => Err(e),
    }
}

pub async fn clear_draft(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    match service::clear_draft(&state.drafts).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e),
    }
}
