//! Inbound query entity

use crate::core::error::DomainError;
use crate::generation::validate_temperature;
use crate::prompt::Mode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A request for the brain to process (Entity)
///
/// Wire shape: `{ "input": "...", "context": {...}, "mode": "code", "temperature": 0.4 }`.
/// Only `input` is required. A temperature of `0` is treated the same as an
/// absent one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainRequest {
    /// The caller's natural-language input.
    pub input: String,
    /// Caller-supplied context. Accepted and carried, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Requested mode; unknown values resolve to [`Mode::General`].
    #[serde(default)]
    pub mode: Mode,
    /// Sampling temperature override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl BrainRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Temperature to apply to this call, if the caller actually set one.
    pub fn requested_temperature(&self) -> Option<f32> {
        self.temperature.filter(|t| *t != 0.0)
    }

    /// Temperature as reported back in metadata (`0` when unset).
    pub fn reported_temperature(&self) -> f32 {
        self.temperature.unwrap_or(0.0)
    }

    /// Validate the payload before it reaches the orchestrator.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.input.is_empty() {
            return Err(DomainError::EmptyInput);
        }
        if let Some(t) = self.temperature {
            validate_temperature(t)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let req: BrainRequest = serde_json::from_str(r#"{"input":"hi"}"#).unwrap();
        assert_eq!(req.input, "hi");
        assert_eq!(req.mode, Mode::General);
        assert_eq!(req.temperature, None);
        assert!(req.context.is_none());
    }

    #[test]
    fn test_deserialize_full() {
        let req: BrainRequest = serde_json::from_str(
            r#"{"input":"build a form","context":{"project":"shop"},"mode":"code","temperature":0.3}"#,
        )
        .unwrap();
        assert_eq!(req.mode, Mode::Code);
        assert_eq!(req.temperature, Some(0.3));
        assert_eq!(req.context.unwrap()["project"], "shop");
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let result = serde_json::from_str::<BrainRequest>(r#"{"mode":"chat"}"#);
        assert!(result.unwrap_err().to_string().contains("missing field `input`"));
    }

    #[test]
    fn test_zero_temperature_means_unset() {
        let req = BrainRequest::new("hi").with_temperature(0.0);
        assert_eq!(req.requested_temperature(), None);
        assert_eq!(req.reported_temperature(), 0.0);

        let req = BrainRequest::new("hi").with_temperature(0.9);
        assert_eq!(req.requested_temperature(), Some(0.9));
    }

    #[test]
    fn test_validate() {
        assert!(BrainRequest::new("hi").validate().is_ok());
        assert_eq!(BrainRequest::new("").validate(), Err(DomainError::EmptyInput));
        assert!(BrainRequest::new("   ").validate().is_ok());
        assert!(
            BrainRequest::new("hi")
                .with_temperature(5.0)
                .validate()
                .is_err()
        );
    }
}
