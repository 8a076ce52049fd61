//! Structured configuration issues.
//!
//! Config loaders report problems as [`ConfigIssue`] values instead of failing
//! on the first one, so the binary can print every issue and decide whether
//! to continue.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name was configured as an empty string.
    EmptyModelName { field: String },
    /// A numeric value lies outside its accepted range.
    OutOfRange { field: String },
    /// A value that must be positive is zero.
    ZeroValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        let code = ConfigIssueCode::ZeroValue {
            field: "gemini.timeout_secs".to_string(),
        };
        assert!(ConfigIssue::error(code.clone(), "zero").is_error());
        assert!(!ConfigIssue::warning(code, "zero").is_error());
    }
}
