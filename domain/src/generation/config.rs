//! Sampling parameters for a generation call.
//!
//! [`GenerationConfig`] is a plain value object. The process holds one set of
//! defaults; each request derives its own copy and hands it to the gateway
//! explicitly, so one caller's temperature can never reach another's call.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Lowest accepted sampling temperature.
pub const TEMPERATURE_MIN: f32 = 0.0;
/// Highest accepted sampling temperature.
pub const TEMPERATURE_MAX: f32 = 2.0;

/// Sampling parameters sent with every generation request.
///
/// # Example
///
/// ```
/// use brain_domain::GenerationConfig;
///
/// let defaults = GenerationConfig::default();
/// let scoped = defaults.with_temperature(Some(0.2));
///
/// assert_eq!(scoped.temperature, 0.2);
/// assert_eq!(defaults.temperature, 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
        }
    }
}

impl GenerationConfig {
    /// Derive a request-scoped copy, overriding temperature when one is given.
    pub fn with_temperature(&self, temperature: Option<f32>) -> Self {
        match temperature {
            Some(t) => Self {
                temperature: t,
                ..*self
            },
            None => *self,
        }
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}

/// Check that a temperature lies within the accepted range.
pub fn validate_temperature(value: f32) -> Result<f32, DomainError> {
    if value.is_finite() && (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::TemperatureOutOfRange {
            value,
            min: TEMPERATURE_MIN,
            max: TEMPERATURE_MAX,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_k, 40);
        assert_eq!(config.top_p, 0.95);
        assert_eq!(config.max_output_tokens, 8192);
    }

    #[test]
    fn test_with_temperature_leaves_source_untouched() {
        let defaults = GenerationConfig::default();
        let scoped = defaults.with_temperature(Some(1.3));
        assert_eq!(scoped.temperature, 1.3);
        assert_eq!(scoped.top_k, defaults.top_k);
        assert_eq!(defaults.temperature, 0.7);
    }

    #[test]
    fn test_with_temperature_none_is_identity() {
        let defaults = GenerationConfig::default().with_top_k(10);
        assert_eq!(defaults.with_temperature(None), defaults);
    }

    #[test]
    fn test_validate_temperature() {
        assert!(validate_temperature(0.0).is_ok());
        assert!(validate_temperature(2.0).is_ok());
        assert!(validate_temperature(-0.1).is_err());
        assert!(validate_temperature(2.01).is_err());
        assert!(validate_temperature(f32::NAN).is_err());
    }
}
