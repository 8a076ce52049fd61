//! Gemini configuration from TOML (`[gemini]` section)

use crate::providers::gemini::{DEFAULT_BASE_URL, GeminiClientConfig};
use brain_domain::generation::{TEMPERATURE_MAX, TEMPERATURE_MIN};
use brain_domain::{ConfigIssue, ConfigIssueCode, GenerationConfig, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini model, credentials and default sampling parameters
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.0-flash-exp"
/// api_key_env = "GEMINI_API_KEY"
/// temperature = 0.7
/// top_k = 40
/// top_p = 0.95
/// max_output_tokens = 8192
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key, used only when the environment variable is unset
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            model: Model::default().to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
            connect_timeout_secs: 10,
            temperature: generation.temperature,
            top_k: generation.top_k,
            top_p: generation.top_p,
            max_output_tokens: generation.max_output_tokens,
        }
    }
}

impl FileGeminiConfig {
    /// Parse the model name, falling back to the default on an empty string.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        if self.model.trim().is_empty() {
            let issue = ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: "gemini.model".to_string(),
                },
                "gemini.model: model name cannot be empty",
            );
            return (Model::default(), vec![issue]);
        }
        (Model::from(self.model.trim()), Vec::new())
    }

    pub fn to_generation_config(&self) -> GenerationConfig {
        GenerationConfig::default()
            .with_temperature(Some(self.temperature))
            .with_top_k(self.top_k)
            .with_top_p(self.top_p)
            .with_max_output_tokens(self.max_output_tokens)
    }

    /// Resolve the API key: the named environment variable wins over the
    /// inline value. Blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        Self::resolve_api_key_with(&self.api_key_env, self.api_key.as_deref(), |name| {
            std::env::var(name).ok()
        })
    }

    fn resolve_api_key_with(
        env_name: &str,
        inline: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Option<String> {
        let from_env = if env_name.is_empty() {
            None
        } else {
            lookup(env_name)
        };
        from_env
            .or_else(|| inline.map(str::to_string))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn to_client_config(&self, api_key: String) -> GeminiClientConfig {
        let mut config = GeminiClientConfig::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs));
        config.connect_timeout = Duration::from_secs(self.connect_timeout_secs);
        config
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_model().1;

        if !(TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(&self.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.temperature".to_string(),
                },
                format!(
                    "gemini.temperature: {} is outside [{}, {}]",
                    self.temperature, TEMPERATURE_MIN, TEMPERATURE_MAX
                ),
            ));
        }
        if self.top_p <= 0.0 || self.top_p > 1.0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "gemini.top_p".to_string(),
                },
                format!("gemini.top_p: {} is outside (0, 1]", self.top_p),
            ));
        }

        for (field, value) in [
            ("top_k", self.top_k as u64),
            ("max_output_tokens", self.max_output_tokens as u64),
            ("timeout_secs", self.timeout_secs),
            ("connect_timeout_secs", self.connect_timeout_secs),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::ZeroValue {
                        field: format!("gemini.{}", field),
                    },
                    format!("gemini.{}: value is 0", field),
                ));
            }
        }

        issues
    }
}
