//! Gemini gateway adapter
//!
//! Implements the `LlmGateway` port on top of the Gemini REST API.
//! Holds one pooled HTTP client; sessions borrow it.

use super::session::GeminiSession;
use async_trait::async_trait;
use brain_application::{GatewayError, LlmGateway, LlmSession};
use brain_domain::{GenerationConfig, Message, Model};
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Connection settings for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Upper bound on a whole generation call.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct GeminiLlmGateway {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl GeminiLlmGateway {
    pub fn new(config: &GeminiClientConfig) -> Result<Self, GatewayError> {
        if config.api_key.trim().is_empty() {
            return Err(GatewayError::AuthenticationFailed(
                "Gemini API key is empty".to_string(),
            ));
        }

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(concat!("brain-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            "Gemini gateway initialized"
        );

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `generateContent` URL for `model`.
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(
        &self,
        model: &Model,
        config: &GenerationConfig,
        history: Vec<Message>,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(GeminiSession::new(
            self.http.clone(),
            self.endpoint(model),
            self.api_key.clone(),
            model.clone(),
            *config,
            history,
        )))
    }
}
