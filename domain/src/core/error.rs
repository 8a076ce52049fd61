//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("input must not be empty")]
    EmptyInput,

    #[error("temperature must be between {min} and {max}, got {value}")]
    TemperatureOutOfRange { value: f32, min: f32, max: f32 },
}
