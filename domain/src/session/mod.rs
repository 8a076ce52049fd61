//! LLM Session domain.
//!
//! - [`entities::SeedConversation`]: the instruction/acknowledgment pair a session starts from
//! - [`entities::Message`]: a single turn within a session
//! - [`response::LlmResponse`]: candidates returned by the model

pub mod entities;
pub mod response;
