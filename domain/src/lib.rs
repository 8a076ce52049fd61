//! Domain layer for brain-api
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Mode**: the closed set of behaviors a caller can ask for
//!   (`code`, `analysis`, `chat`, or the general fallback)
//! - **Prompt composition**: a fixed base instruction plus a mode addendum
//! - **Seed conversation**: the instruction/acknowledgment pair every session
//!   starts from
//! - **Generation config**: sampling parameters, derived per request

pub mod config;
pub mod core;
pub mod generation;
pub mod prompt;
pub mod query;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model};
pub use generation::GenerationConfig;
pub use prompt::{Mode, PromptComposer};
pub use query::{BrainRequest, BrainResponse, ResponseMetadata};
pub use session::{
    entities::{ACKNOWLEDGMENT, Message, Role, SeedConversation},
    response::{Candidate, ContentPart, FinishReason, LlmResponse, TokenUsage},
};
