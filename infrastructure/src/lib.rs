//! Infrastructure layer for brain-api
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGeminiConfig, FileServerConfig};
pub use providers::gemini::{GeminiClientConfig, GeminiLlmGateway, GeminiSession};
