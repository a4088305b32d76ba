use serde_json::Value;

/// Knobs for a text-model call.
#[derive(Debug, Clone, Default)]
pub struct TextOptions {
    pub max_output_tokens: Option<u32>,
    pub disable_thinking: bool,
    /// When set, the model is asked for `application/json` matching this schema.
    pub response_schema: Option<Value>,
}

impl TextOptions {
    pub fn fast() -> Self {
        Self {
            disable_thinking: true,
            ..Self::default()
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    pub fn with_response_schema(mut self, response_schema: Value) -> Self {
        self.response_schema = Some(response_schema);
        self
    }
}
