//! Google Gemini provider
//!
//! Talks to the `generateContent` REST endpoint with API-key
//! authentication. One HTTP client is shared by all sessions.

mod adapter;
mod session;
mod types;

pub use adapter::{DEFAULT_BASE_URL, GeminiClientConfig, GeminiLlmGateway};
pub use session::GeminiSession;
