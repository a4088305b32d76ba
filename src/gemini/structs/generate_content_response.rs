use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, empty when there are none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
    }
}

impl Candidate {
    pub fn parts(&self) -> &[Part] {
        match &self.content {
            Some(content) => &content.parts,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] }, "finishReason": "STOP" },
                    { "content": { "parts": [{ "text": "ignored" }] } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(response.text(), "Hello, world");
    }

    #[test]
    fn text_is_empty_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{ "promptFeedback": { "blockReason": "SAFETY" } }"#,
        )
        .unwrap();

        assert_eq!(response.text(), "");
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }

    #[test]
    fn inline_data_is_read_from_camel_case() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": { "role": "model", "parts": [
                        { "text": "here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "aGk=" } }
                    ] }
                }],
                "usageMetadata": { "promptTokenCount": 12 }
            }"#,
        )
        .unwrap();

        let parts = response.candidates[0].parts();

        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[1].inline_data,
            Some(InlineData {
                mime_type: "image/png".to_string(),
                data: "aGk=".to_string(),
            })
        );
    }
}
