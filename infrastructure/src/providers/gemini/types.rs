//! Gemini `generateContent` wire types and conversions to domain types.

use brain_application::GatewayError;
use brain_domain::{
    Candidate, ContentPart, FinishReason, GenerationConfig, LlmResponse, Message, Role,
    TokenUsage,
};
use serde::{Deserialize, Serialize};

// ─── Wire types ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: WireGenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only `text` is interpreted; other part kinds
/// (`functionCall`, `inlineData`, ...) deserialize with `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCandidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageMetadata {
    pub prompt_token_count: u32,
    pub candidates_token_count: u32,
    pub total_token_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

// ─── Domain → Gemini ─────────────────────────────────────────────

fn text_content(role: Role, text: &str) -> Content {
    Content {
        role: Some(role.as_str().to_string()),
        parts: vec![Part {
            text: Some(text.to_string()),
        }],
    }
}

impl From<&GenerationConfig> for WireGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Build a request from prior turns plus the new user input.
pub fn build_request(
    history: &[Message],
    input: &str,
    config: &GenerationConfig,
) -> GenerateContentRequest {
    let contents = history
        .iter()
        .map(|m| text_content(m.role, &m.content))
        .chain(std::iter::once(text_content(Role::User, input)))
        .collect();

    GenerateContentRequest {
        contents,
        generation_config: config.into(),
    }
}

// ─── Gemini → Domain ─────────────────────────────────────────────

pub fn convert_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        other => FinishReason::Other(other.to_string()),
    }
}

fn convert_candidate(candidate: WireCandidate) -> Candidate {
    let parts = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .map(|p| match p.text {
            Some(text) => ContentPart::Text(text),
            None => ContentPart::Other,
        })
        .collect();

    Candidate {
        parts,
        finish_reason: candidate.finish_reason.as_deref().map(convert_finish_reason),
    }
}

pub fn convert_response(response: GenerateContentResponse) -> LlmResponse {
    LlmResponse {
        candidates: response
            .candidates
            .into_iter()
            .map(convert_candidate)
            .collect(),
        usage: response.usage_metadata.map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
            total_tokens: u.total_token_count,
        }),
    }
}

/// Map a non-success HTTP status and its body to a gateway error.
///
/// The upstream message is kept verbatim when the body is a Gemini error
/// document; otherwise the raw body is used.
pub fn convert_http_error(status: u16, body: &str) -> GatewayError {
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(code) => format!("{} ({}): {}", status, code, parsed.error.message),
            None => format!("{}: {}", status, parsed.error.message),
        },
        Err(_) => format!("{}: {}", status, body.trim()),
    };

    match status {
        401 | 403 => GatewayError::AuthenticationFailed(message),
        429 => GatewayError::QuotaExceeded(message),
        _ => GatewayError::RequestFailed(message),
    }
}

pub fn convert_transport_error(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else if error.is_decode() {
        GatewayError::InvalidResponse(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}
