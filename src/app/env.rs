use serde::Deserialize;

pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";
pub const DEFAULT_RATE_LIMIT_PER_SEC: u64 = 5;
pub const DEFAULT_REQUEST_QUEUE_SIZE: usize = 32;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub gemini_api_key: String,
    pub gemini_api_url: Option<String>,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    pub request_timeout_secs: Option<u64>,

    pub drafts_dir: Option<String>,

    pub rate_limit_per_sec: Option<u64>,
    pub request_queue_size: Option<usize>,
}

impl Envy {
    pub fn gemini_api_url(&self) -> &str {
        self.gemini_api_url
            .as_deref()
            .unwrap_or(DEFAULT_GEMINI_API_URL)
    }

    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn drafts_dir(&self) -> &str {
        self.drafts_dir.as_deref().unwrap_or(".")
    }

    pub fn rate_limit_per_sec(&self) -> u64 {
        self.rate_limit_per_sec
            .unwrap_or(DEFAULT_RATE_LIMIT_PER_SEC)
            .max(1)
    }

    /// Requests allowed to wait on the rate limiter before new ones are shed.
    pub fn request_queue_size(&self) -> usize {
        self.request_queue_size
            .unwrap_or(DEFAULT_REQUEST_QUEUE_SIZE)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_keys_fall_back_to_defaults() {
        let vars = vec![
            ("APP_ENV".to_string(), "test".to_string()),
            ("GEMINI_API_KEY".to_string(), "secret".to_string()),
        ];
        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.port, None);
        assert_eq!(envy.gemini_api_url(), DEFAULT_GEMINI_API_URL);
        assert_eq!(envy.text_model(), DEFAULT_TEXT_MODEL);
        assert_eq!(envy.image_model(), DEFAULT_IMAGE_MODEL);
        assert_eq!(envy.drafts_dir(), ".");
        assert_eq!(envy.rate_limit_per_sec(), DEFAULT_RATE_LIMIT_PER_SEC);
        assert_eq!(envy.request_queue_size(), DEFAULT_REQUEST_QUEUE_SIZE);
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let vars = vec![("APP_ENV".to_string(), "test".to_string())];
        let result = envy::from_iter::<_, Envy>(vars);

        assert!(result.is_err());
    }

    #[test]
    fn overrides_are_read() {
        let vars = vec![
            ("APP_ENV".to_string(), "production".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("GEMINI_API_KEY".to_string(), "secret".to_string()),
            ("TEXT_MODEL".to_string(), "text-model".to_string()),
            ("IMAGE_MODEL".to_string(), "image-model".to_string()),
            ("DRAFTS_DIR".to_string(), "/var/lib/storyframe".to_string()),
            ("RATE_LIMIT_PER_SEC".to_string(), "20".to_string()),
            ("REQUEST_QUEUE_SIZE".to_string(), "0".to_string()),
        ];
        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.port, Some(8080));
        assert_eq!(envy.text_model(), "text-model");
        assert_eq!(envy.image_model(), "image-model");
        assert_eq!(envy.drafts_dir(), "/var/lib/storyframe");
        assert_eq!(envy.rate_limit_per_sec(), 20);
        assert_eq!(envy.request_queue_size(), 1);
    }
}
