use std::{collections::VecDeque, sync::Mutex};

use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::{
    enums::response_modality::ResponseModality, gateway::ModelGateway,
    models::text_options::TextOptions,
    structs::generate_content_response::GenerateContentResponse,
};

#[derive(Debug, Clone)]
pub struct TextCall {
    pub instruction: String,
    pub input: String,
    pub options: TextOptions,
}

#[derive(Debug, Clone)]
pub struct CompositeCall {
    pub prompt: String,
    pub modalities: Vec<ResponseModality>,
}

/// Replays scripted replies in order and records every call it receives.
#[derive(Default)]
pub struct FakeGateway {
    text_replies: Mutex<VecDeque<Result<String, ApiError>>>,
    composite_replies: Mutex<VecDeque<Result<GenerateContentResponse, ApiError>>>,
    text_calls: Mutex<Vec<TextCall>>,
    composite_calls: Mutex<Vec<CompositeCall>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, reply: &str) -> Self {
        self.text_replies
            .lock()
            .unwrap()
            .push_back(Ok(reply.to_string()));
        self
    }

    pub fn with_text_error(self, message: &str) -> Self {
        self.text_replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::internal(message)));
        self
    }

    pub fn with_composite(self, response: GenerateContentResponse) -> Self {
        self.composite_replies
            .lock()
            .unwrap()
            .push_back(Ok(response));
        self
    }

    pub fn with_composite_json(self, json: &str) -> Self {
        let response = serde_json::from_str(json).unwrap();
        self.with_composite(response)
    }

    pub fn with_composite_error(self, message: &str) -> Self {
        self.composite_replies
            .lock()
            .unwrap()
            .push_back(Err(ApiError::internal(message)));
        self
    }

    pub fn text_calls(&self) -> Vec<TextCall> {
        self.text_calls.lock().unwrap().clone()
    }

    pub fn composite_calls(&self) -> Vec<CompositeCall> {
        self.composite_calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.text_calls.lock().unwrap().len() + self.composite_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelGateway for FakeGateway {
    async fn generate_text(
        &self,
        instruction: &str,
        input: &str,
        options: &TextOptions,
    ) -> Result<String, ApiError> {
        self.text_calls.lock().unwrap().push(TextCall {
            instruction: instruction.to_string(),
            input: input.to_string(),
            options: options.clone(),
        });

        match self.text_replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Err(ApiError::internal("no scripted text reply")),
        }
    }

    async fn generate_composite(
        &self,
        prompt: &str,
        modalities: &[ResponseModality],
    ) -> Result<GenerateContentResponse, ApiError> {
        self.composite_calls.lock().unwrap().push(CompositeCall {
            prompt: prompt.to_string(),
            modalities: modalities.to_vec(),
        });

        match self.composite_replies.lock().unwrap().pop_front() {
            Some(reply) => reply,
            None => Err(ApiError::internal("no scripted composite reply")),
        }
    }
}
