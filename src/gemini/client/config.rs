use std::time::Duration;

use crate::app::env::Envy;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_envy(envy: &Envy) -> Config {
        Config {
            api_key: envy.gemini_api_key.to_string(),
            api_url: envy.gemini_api_url().trim_end_matches('/').to_string(),
            text_model: envy.text_model().to_string(),
            image_model: envy.image_model().to_string(),
            timeout: Duration::from_secs(envy.request_timeout_secs.unwrap_or(120)),
        }
    }

    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_url, model)
    }
}
