//! Outbound query result

use crate::prompt::Mode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What was used to produce a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Model identifier
    pub model: String,
    /// Mode the request was processed under
    pub mode: Mode,
    /// Temperature the caller requested (`0` when unset)
    pub temperature: f32,
}

/// Result of processing a [`BrainRequest`](super::BrainRequest) (Entity)
///
/// `output` is always present, empty when the model produced nothing.
/// `excellence_report` is reserved and omitted from the wire when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainResponse {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excellence_report: Option<Map<String, Value>>,
    pub metadata: ResponseMetadata,
}

impl BrainResponse {
    pub fn new(output: impl Into<String>, metadata: ResponseMetadata) -> Self {
        Self {
            output: output.into(),
            excellence_report: None,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ResponseMetadata {
        ResponseMetadata {
            model: "gemini-2.0-flash-exp".to_string(),
            mode: Mode::Chat,
            temperature: 0.0,
        }
    }

    #[test]
    fn test_serialize_omits_excellence_report() {
        let json = serde_json::to_value(BrainResponse::new("hello", metadata())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "output": "hello",
                "metadata": {
                    "model": "gemini-2.0-flash-exp",
                    "mode": "chat",
                    "temperature": 0.0
                }
            })
        );
    }

    #[test]
    fn test_empty_output_is_serialized_as_empty_string() {
        let json = serde_json::to_value(BrainResponse::new("", metadata())).unwrap();
        assert_eq!(json["output"], "");
    }
}
