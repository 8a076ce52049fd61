//! Generation parameters.

pub mod config;

pub use config::{GenerationConfig, TEMPERATURE_MAX, TEMPERATURE_MIN, validate_temperature};
