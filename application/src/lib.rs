//! Application layer for brain-api
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BrainConfig;
pub use ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
pub use use_cases::process_query::{ProcessQueryError, ProcessQueryUseCase};
