//! Model response types.
//!
//! A generation call returns zero or more candidates, each holding an ordered
//! list of content parts. Only the first part of the first candidate is ever
//! surfaced to callers; the rest is kept for logging.

/// A single part of a candidate's content.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentPart {
    /// Plain text produced by the model.
    Text(String),
    /// A part the service does not interpret (function calls, inline data).
    Other,
}

impl ContentPart {
    /// Returns the text if this is a `Text` part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(s) => Some(s),
            ContentPart::Other => None,
        }
    }
}

/// Reason the model stopped generating a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other(String),
}

/// One generated alternative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub parts: Vec<ContentPart>,
    pub finish_reason: Option<FinishReason>,
}

impl Candidate {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![ContentPart::Text(text.into())],
            finish_reason: Some(FinishReason::Stop),
        }
    }
}

/// Token accounting reported by the provider, when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// A structured response from the model.
///
/// # Examples
///
/// ```
/// use brain_domain::session::response::LlmResponse;
///
/// let response = LlmResponse::from_text("Hello!");
/// assert_eq!(response.first_text(), Some("Hello!"));
///
/// let empty = LlmResponse::empty();
/// assert_eq!(empty.output_text(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmResponse {
    pub candidates: Vec<Candidate>,
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    /// A response carrying a single text candidate.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate::from_text(text)],
            usage: None,
        }
    }

    /// A response with no candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Text of the first candidate's first part, if both exist and the part is text.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.parts.first())
            .and_then(ContentPart::as_text)
    }

    /// Output as surfaced to callers: the first text, or the empty string.
    pub fn output_text(&self) -> String {
        self.first_text().unwrap_or_default().to_string()
    }

    /// Finish reason of the first candidate.
    pub fn finish_reason(&self) -> Option<&FinishReason> {
        self.candidates.first().and_then(|c| c.finish_reason.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_creates_single_candidate() {
        let response = LlmResponse::from_text("hello");
        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.output_text(), "hello");
        assert_eq!(response.finish_reason(), Some(&FinishReason::Stop));
    }

    #[test]
    fn no_candidates_yields_empty_output() {
        let response = LlmResponse::empty();
        assert_eq!(response.first_text(), None);
        assert_eq!(response.output_text(), "");
    }

    #[test]
    fn candidate_without_parts_yields_empty_output() {
        let response = LlmResponse {
            candidates: vec![Candidate {
                parts: vec![],
                finish_reason: Some(FinishReason::Safety),
            }],
            usage: None,
        };
        assert_eq!(response.output_text(), "");
    }

    #[test]
    fn only_first_part_of_first_candidate_is_used() {
        let response = LlmResponse {
            candidates: vec![
                Candidate {
                    parts: vec![
                        ContentPart::Text("first".to_string()),
                        ContentPart::Text("second".to_string()),
                    ],
                    finish_reason: None,
                },
                Candidate::from_text("other candidate"),
            ],
            usage: None,
        };
        assert_eq!(response.output_text(), "first");
    }

    #[test]
    fn non_text_first_part_yields_empty_output() {
        let response = LlmResponse {
            candidates: vec![Candidate {
                parts: vec![ContentPart::Other, ContentPart::Text("later".to_string())],
                finish_reason: None,
            }],
            usage: None,
        };
        assert_eq!(response.output_text(), "");
    }
}
