//! Gemini LLM session implementation
//!
//! Wraps the `generateContent` REST endpoint to implement the `LlmSession`
//! trait. The endpoint is stateless, so the session keeps the conversation
//! locally and sends the full history on every call.

use super::types;
use async_trait::async_trait;
use brain_application::{GatewayError, LlmSession};
use brain_domain::{GenerationConfig, LlmResponse, Message, Model};
use reqwest::Client as HttpClient;
use tokio::sync::Mutex;
use tracing::debug;

pub struct GeminiSession {
    http: HttpClient,
    endpoint: String,
    api_key: String,
    model: Model,
    config: GenerationConfig,
    /// Conversation history (stateless API requires full history each call)
    messages: Mutex<Vec<Message>>,
}

impl GeminiSession {
    pub fn new(
        http: HttpClient,
        endpoint: String,
        api_key: String,
        model: Model,
        config: GenerationConfig,
        history: Vec<Message>,
    ) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            model,
            config,
            messages: Mutex::new(history),
        }
    }

    /// Execute one `generateContent` call.
    async fn generate(
        &self,
        request: &types::GenerateContentRequest,
    ) -> Result<LlmResponse, GatewayError> {
        debug!(
            model = %self.model,
            contents = request.contents.len(),
            temperature = self.config.temperature,
            "Calling Gemini generateContent"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| types::convert_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(status.as_u16(), response.text().await);
            return Err(types::convert_http_error(status.as_u16(), &body));
        }

        let body: types::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        let response = types::convert_response(body);
        debug!(
            candidates = response.candidates.len(),
            finish_reason = ?response.finish_reason(),
            usage = ?response.usage,
            "Gemini response received"
        );
        Ok(response)
    }
}

/// Body of a failed call, or empty when it could not be read.
fn error_body<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            debug!(status, "Failed to read Gemini error body: {}", e);
            String::new()
        }
    }
}

#[async_trait]
impl LlmSession for GeminiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    fn config(&self) -> &GenerationConfig {
        &self.config
    }

    async fn send(&self, content: &str) -> Result<LlmResponse, GatewayError> {
        let mut messages = self.messages.lock().await;
        let request = types::build_request(&messages, content, &self.config);

        let response = self.generate(&request).await?;

        // Append the exchange so a follow-up send sees it
        messages.push(Message::user(content));
        if let Some(text) = response.first_text() {
            messages.push(Message::model(text));
        }

        Ok(response)
    }
}
