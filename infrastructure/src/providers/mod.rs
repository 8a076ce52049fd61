//! Model provider adapters implementing the `LlmGateway` port.

pub mod gemini;
