use super::{enums::visual_style::VisualStyle, models::panel_description::PanelDescription};

pub const MODERATION_PROMPT: &str = "Analyze the following text. Does it contain sexually explicit, pornographic, or otherwise inappropriate content unsuitable for a general audience?
Respond with only \"YES\" or \"NO\".";

pub const TRANSLATE_TO_ENGLISH_PROMPT: &str = "Translate the following text to English.
Return only the translated text, without any preamble or explanation.";

pub const STORY_GENERATION_PROMPT: &str = "You are a creative storyteller for comics.
Based on the following prompt, write a short story of about 3-5 sentences.
The story should be simple, with a clear beginning, middle, and end.
It needs to be suitable for being turned into a short visual comic strip of 3-6 panels.
Focus on clear actions and visual moments. Do not include panel descriptions, just the story text.";

pub const STORY_BREAKDOWN_PROMPT: &str = "You are a storyboard artist. Your task is to break down the following story into a series of distinct comic book panels.
For each panel, provide a detailed visual description suitable for an image generation AI, and a short caption or dialogue.
The visual description should be rich with details about characters, actions, setting, and mood. Ensure character descriptions are consistent.
The caption should be the dialogue or a short narrative text for that panel.
Do not generate the images, only the structured data.";

pub fn text_input(text: &str) -> String {
    format!("TEXT: {}", text)
}

pub fn prompt_input(prompt: &str) -> String {
    format!("PROMPT: {}", prompt)
}

pub fn story_input(story: &str) -> String {
    format!("STORY:\n{}", story)
}

/// `Panel <n>:` blocks in sequence order, separated by blank lines.
pub fn panel_blocks(descriptions: &[PanelDescription]) -> String {
    descriptions
        .iter()
        .map(|d| {
            format!(
                "Panel {}:\nVisuals: {}\nCaption: \"{}\"",
                d.panel, d.visual_description, d.caption
            )
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

pub fn comic_page_prompt(descriptions: &[PanelDescription], style: VisualStyle) -> String {
    format!(
        "You are an expert comic book artist.
Create a single image that is a complete comic book page.
The page must follow this visual style: {style}.
Arrange the {count} panels in a logical grid layout (e.g., 2x2, 3x1, etc., based on the number of panels).
The panels should be clearly separated by gutters.
The characters and art style must be consistent across all panels.
Render the specified captions inside speech bubbles or caption boxes within each respective panel.

Here are the descriptions for each panel:
{panels}",
        style = style.descriptor(),
        count = descriptions.len(),
        panels = panel_blocks(descriptions),
    )
}
