//! Session domain entities

use crate::prompt::{Mode, PromptComposer};
use serde::{Deserialize, Serialize};

/// Reply installed as the model's turn after the system instruction.
pub const ACKNOWLEDGMENT: &str = "Understood. Ready to process requests with excellence.";

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// The two-turn history a session starts from (Value Object)
///
/// Turn one carries the system instruction as a user message; turn two is the
/// model's acknowledgment. Built once per request and never shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConversation {
    instruction: Message,
    acknowledgment: Message,
}

impl SeedConversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            instruction: Message::user(system_prompt),
            acknowledgment: Message::model(ACKNOWLEDGMENT),
        }
    }

    /// Seed for `mode`, using the composed system instruction.
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(PromptComposer::compose(mode))
    }

    pub fn system_prompt(&self) -> &str {
        &self.instruction.content
    }

    pub fn into_messages(self) -> Vec<Message> {
        vec![self.instruction, self.acknowledgment]
    }
}
