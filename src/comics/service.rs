use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    app::models::api_error::ApiError,
    gemini::{
        enums::{finish_reason::FinishReason, response_modality::ResponseModality},
        gateway::ModelGateway,
        models::text_options::TextOptions,
        structs::generate_content_response::GenerateContentResponse,
    },
};

use super::{
    dtos::{generate_comic_dto::GenerateComicDto, generate_story_dto::GenerateStoryDto},
    enums::visual_style::VisualStyle,
    errors::ComicsApiError,
    models::{comic::Comic, comic_page::ComicPage, panel_description::PanelDescription},
    prompts,
};

const MODERATION_MAX_OUTPUT_TOKENS: u32 = 5;

#[derive(Debug, Deserialize)]
struct PanelBreakdown {
    panels: Vec<PanelDescription>,
}

/// Fails closed: a model error aborts the caller instead of letting the text through.
pub async fn is_content_inappropriate(
    text: &str,
    gateway: &dyn ModelGateway,
) -> Result<bool, ApiError> {
    if text.trim().is_empty() {
        return Ok(false);
    }

    let options = TextOptions::fast().with_max_output_tokens(MODERATION_MAX_OUTPUT_TOKENS);
    let decision = gateway
        .generate_text(prompts::MODERATION_PROMPT, &prompts::text_input(text), &options)
        .await?;

    Ok(decision.trim().to_uppercase() == "YES")
}

/// Fails open: on any model error, or an empty reply, the original text comes back.
pub async fn translate_to_english(text: &str, gateway: &dyn ModelGateway) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let result = gateway
        .generate_text(
            prompts::TRANSLATE_TO_ENGLISH_PROMPT,
            &prompts::text_input(text),
            &TextOptions::fast(),
        )
        .await;

    match result {
        Ok(translation) => {
            let translation = translation.trim();
            if translation.is_empty() {
                tracing::warn!("translation came back empty, using original text");
                return text.to_string();
            }
            translation.to_string()
        }
        Err(e) => {
            tracing::warn!(error = %e, "translation failed, using original text");
            text.to_string()
        }
    }
}

pub async fn generate_story(prompt: &str, gateway: &dyn ModelGateway) -> Result<String, ApiError> {
    let result = gateway
        .generate_text(
            prompts::STORY_GENERATION_PROMPT,
            &prompts::prompt_input(prompt),
            &TextOptions::default(),
        )
        .await;

    match result {
        Ok(story) if !story.trim().is_empty() => Ok(story.trim().to_string()),
        Ok(_) => {
            tracing::error!("story generation returned no text");
            Err(ComicsApiError::StoryGenerationFailed.value())
        }
        Err(e) => {
            tracing::error!(%e, "story generation failed");
            Err(ComicsApiError::StoryGenerationFailed.value())
        }
    }
}

pub fn panel_breakdown_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "panels": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "panel": {
                            "type": "INTEGER",
                            "description": "The sequential number of the panel."
                        },
                        "visual_description": {
                            "type": "STRING",
                            "description": "A detailed visual description for the image generation AI."
                        },
                        "caption": {
                            "type": "STRING",
                            "description": "The dialogue or narrative caption for the panel."
                        }
                    },
                    "required": ["panel", "visual_description", "caption"]
                }
            }
        },
        "required": ["panels"]
    })
}

pub async fn generate_panel_breakdown(
    story: &str,
    gateway: &dyn ModelGateway,
) -> Result<Vec<PanelDescription>, ApiError> {
    let options = TextOptions::default().with_response_schema(panel_breakdown_schema());
    let text = gateway
        .generate_text(
            prompts::STORY_BREAKDOWN_PROMPT,
            &prompts::story_input(story),
            &options,
        )
        .await?;

    parse_panel_breakdown(&text)
}

pub fn parse_panel_breakdown(text: &str) -> Result<Vec<PanelDescription>, ApiError> {
    let breakdown: PanelBreakdown = match serde_json::from_str(text.trim()) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            tracing::error!(%e, %text, "unreadable storyboard");
            return Err(ComicsApiError::StoryboardUnreadable.value());
        }
    };

    if breakdown.panels.is_empty() {
        return Err(ComicsApiError::EmptyStoryboard.value());
    }

    if breakdown.panels.iter().any(|panel| panel.panel == 0) {
        tracing::error!(%text, "storyboard numbers a panel 0");
        return Err(ComicsApiError::StoryboardUnreadable.value());
    }

    Ok(breakdown.panels)
}

pub async fn generate_comic_page(
    descriptions: &[PanelDescription],
    style: VisualStyle,
    gateway: &dyn ModelGateway,
) -> Result<ComicPage, ApiError> {
    let prompt = prompts::comic_page_prompt(descriptions, style);
    let response = gateway
        .generate_composite(&prompt, &[ResponseModality::Image, ResponseModality::Text])
        .await?;

    extract_comic_page(&response)
}

/// Takes the first inline image of the first candidate. Later images are ignored.
pub fn extract_comic_page(response: &GenerateContentResponse) -> Result<ComicPage, ApiError> {
    let Some(candidate) = response.candidates.first() else {
        return match response.block_reason() {
            Some(reason) => Err(ComicsApiError::RequestBlocked(reason.to_string()).value()),
            None => Err(ComicsApiError::NoCandidates.value()),
        };
    };

    let parts = candidate.parts();

    if parts.is_empty() {
        return match candidate.finish_reason.as_deref() {
            Some(reason) if !FinishReason::is_normal(reason) => {
                Err(ComicsApiError::GenerationStopped(reason.to_string()).value())
            }
            _ => Err(ComicsApiError::NoContentParts.value()),
        };
    }

    match parts.iter().find_map(|part| part.inline_data.as_ref()) {
        Some(inline_data) => Ok(ComicPage::from_inline_data(inline_data)),
        None => Err(ComicsApiError::NoImage.value()),
    }
}

pub async fn create_comic(
    dto: &GenerateComicDto,
    gateway: &dyn ModelGateway,
) -> Result<Comic, ApiError> {
    if dto.story.trim().is_empty() {
        return Err(ComicsApiError::EmptyStory.value());
    }

    tracing::debug!("checking content safety");
    if is_content_inappropriate(&dto.story, gateway).await? {
        return Err(ComicsApiError::InappropriateStory.value());
    }

    tracing::debug!("translating and analyzing story");
    let translated_story = translate_to_english(&dto.story, gateway).await;
    let panels = generate_panel_breakdown(&translated_story, gateway).await?;

    tracing::debug!(panels = panels.len(), style = ?dto.style, "drawing comic page");
    let page = generate_comic_page(&panels, dto.style, gateway).await?;

    Ok(Comic { panels, page })
}

pub async fn draft_story(
    dto: &GenerateStoryDto,
    gateway: &dyn ModelGateway,
) -> Result<String, ApiError> {
    if dto.prompt.trim().is_empty() {
        return Err(ComicsApiError::EmptyPrompt.value());
    }

    if is_content_inappropriate(&dto.prompt, gateway).await? {
        return Err(ComicsApiError::InappropriatePrompt.value());
    }

    let translated_prompt = translate_to_english(&dto.prompt, gateway).await;

    generate_story(&translated_prompt, gateway).await
}
