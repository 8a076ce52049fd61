//! Request mode. Selects the behavior addendum of the system instruction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of work a caller asks the brain to do (Value Object)
///
/// The set is closed. Any value the service does not recognize, including the
/// empty string or an absent field, resolves to [`Mode::General`], which uses
/// the base instruction with no addendum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Generate complete, production-ready code
    Code,
    /// Review supplied code and score it
    Analysis,
    /// Conversational assistant
    Chat,
    /// Base instruction only
    #[default]
    General,
}

impl Mode {
    /// Wire name reported back in response metadata
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Code => "code",
            Mode::Analysis => "analysis",
            Mode::Chat => "chat",
            Mode::General => "general",
        }
    }

    /// Resolve a raw mode string. Matching is exact; anything else,
    /// including other casings, falls back to `General`.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "code" => Mode::Code,
            "analysis" => Mode::Analysis,
            "chat" => Mode::Chat,
            _ => Mode::General,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Mode::parse_lenient(s)
    }
}

impl Serialize for Mode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().map(Mode::parse_lenient).unwrap_or_default())
    }
}
