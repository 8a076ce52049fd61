//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative model.

use async_trait::async_trait;
use brain_domain::{GenerationConfig, LlmResponse, Message, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with the model
/// provider. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with the given sampling parameters and prior turns.
    ///
    /// `config` is owned by the caller's request; implementations must use it
    /// as given and never fold it back into shared state.
    async fn create_session(
        &self,
        model: &Model,
        config: &GenerationConfig,
        history: Vec<Message>,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Get the sampling parameters this session sends with every request
    fn config(&self) -> &GenerationConfig;

    /// Send a user message and wait for the complete response
    async fn send(&self, content: &str) -> Result<LlmResponse, GatewayError>;
}
