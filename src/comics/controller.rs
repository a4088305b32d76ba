use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::{
        comic_page_payload_dto::ComicPagePayloadDto,
        download_comic_page_dto::DownloadComicPageDto, generate_comic_dto::GenerateComicDto,
        generate_story_dto::GenerateStoryDto, prompt_payload_dto::PromptPayloadDto,
        proxy_request_dto::ProxyRequestDto, story_payload_dto::StoryPayloadDto,
        text_payload_dto::TextPayloadDto,
    },
    enums::proxy_action::ProxyAction,
    errors::ComicsApiError,
    models::comic::Comic,
    service,
};

#[derive(Serialize)]
struct ProxyResult<T> {
    result: T,
}

/// Single entry point that keeps model credentials on the server.
pub async fn handle_action(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<ProxyRequestDto>,
) -> Result<Response, ApiError> {
    let Some(action) = ProxyAction::from_value(&dto.action) else {
        return Err(ComicsApiError::InvalidAction.value());
    };

    let gateway = state.gateway.as_ref();

    let result = match action {
        ProxyAction::IsContentInappropriate => {
            let payload: TextPayloadDto = parse_payload(dto.payload)?;
            service::is_content_inappropriate(&payload.text, gateway)
                .await
                .map(respond)
        }
        ProxyAction::TranslateToEnglish => {
            let payload: TextPayloadDto = parse_payload(dto.payload)?;
            Ok(respond(
                service::translate_to_english(&payload.text, gateway).await,
            ))
        }
        ProxyAction::GenerateStory => {
            let payload: PromptPayloadDto = parse_payload(dto.payload)?;
            service::generate_story(&payload.prompt, gateway)
                .await
                .map(respond)
        }
        ProxyAction::GeneratePanelBreakdown => {
            let payload: StoryPayloadDto = parse_payload(dto.payload)?;
            service::generate_panel_breakdown(&payload.story, gateway)
                .await
                .map(respond)
        }
        ProxyAction::GenerateComicPage => {
            let payload: ComicPagePayloadDto = parse_payload(dto.payload)?;
            if let Err(e) = payload.validate() {
                return Err(ComicsApiError::InvalidPayload(e.to_string()).value());
            }
            service::generate_comic_page(&payload.descriptions, payload.style, gateway)
                .await
                .map(respond)
        }
    };

    match result {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!("api error on action {}: {}", action.value(), e.message);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.message,
            })
        }
    }
}

pub async fn create_comic(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateComicDto>,
) -> Result<Json<Comic>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::create_comic(&dto, state.gateway.as_ref()).await {
        Ok(comic) => Ok(Json(comic)),
        Err(e) => Err(e),
    }
}

pub async fn draft_story(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateStoryDto>,
) -> Result<Json<Value>, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    match service::draft_story(&dto, state.gateway.as_ref()).await {
        Ok(story) => Ok(Json(json!({ "story": story }))),
        Err(e) => Err(e),
    }
}

pub async fn download_comic_page(
    JsonFromRequest(dto): JsonFromRequest<DownloadComicPageDto>,
) -> Result<Response, ApiError> {
    let Ok(mime_type) = dto.page.mime_type.parse::<mime::Mime>() else {
        return Err(ComicsApiError::InvalidMimeType.value());
    };

    if mime_type.type_() != mime::IMAGE {
        return Err(ComicsApiError::InvalidMimeType.value());
    }

    let bytes = dto.page.bytes()?;
    let file_name = format!("storyframe-comic.{}", mime_type.subtype());

    Ok((
        [
            (header::CONTENT_TYPE, mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

fn parse_payload<T: DeserializeOwned>(payload: Value) -> Result<T, ApiError> {
    match serde_json::from_value(payload) {
        Ok(payload) => Ok(payload),
        Err(e) => Err(ComicsApiError::InvalidPayload(e.to_string()).value()),
    }
}

fn respond<T: Serialize>(result: T) -> Response {
    Json(ProxyResult { result }).into_response()
}
