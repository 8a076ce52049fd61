//! Raw TOML configuration data types
//!
//! These structs mirror the config file layout. Every field has a default,
//! so a partial file (or none at all) deserializes.

mod gemini;
mod server;

pub use gemini::FileGeminiConfig;
pub use server::{DEFAULT_PORT, FileServerConfig};

use brain_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener settings
    pub server: FileServerConfig,
    /// Gemini model, credentials and sampling defaults
    pub gemini: FileGeminiConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.gemini.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_domain::Model;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "127.0.0.1"
port = 9000

[gemini]
model = "gemini-1.5-pro"
api_key_env = "MY_GEMINI_KEY"
temperature = 0.25
top_k = 20
max_output_tokens = 1024
timeout_secs = 60
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.gemini.parse_model().0, Model::Gemini15Pro);
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");

        let generation = config.gemini.to_generation_config();
        assert_eq!(generation.temperature, 0.25);
        assert_eq!(generation.top_k, 20);
        assert_eq!(generation.top_p, 0.95);
        assert_eq!(generation.max_output_tokens, 1024);
        assert_eq!(config.gemini.timeout_secs, 60);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[server]
port = 3000
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.gemini, FileGeminiConfig::default());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }
}
