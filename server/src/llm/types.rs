//! LLM types: provider errors and the chat trait.
//!
//! The relay talks to exactly one generative-language endpoint, so the
//! surface is small: a prompt goes in, answer text comes out, and every way
//! that can go wrong is an [`LlmError`] variant whose `Display` is the message
//! the chat widget shows to the user.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the provider failed before a response arrived.
    #[error("{0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    ///
    /// `message` is the provider's embedded `error.message` when present,
    /// otherwise a generic status line.
    #[error("{message}")]
    ApiResponse { status: u16, message: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider refused the prompt and reported why.
    #[error("Request was blocked: {reason}. Please rephrase your question.")]
    Blocked { reason: String },

    /// The provider answered with no usable candidate.
    #[error("No valid response was received from the API.")]
    NoValidResponse,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Build an [`LlmError::ApiResponse`], preferring the provider's message.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        Self::ApiResponse { status, message }
    }
}

impl crate::error::ErrorCode for LlmError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingApiKey { .. } => "E_MISSING_API_KEY",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::ApiParse(_) => "E_API_PARSE",
            Self::Blocked { .. } => "E_BLOCKED",
            Self::NoValidResponse => "E_NO_VALID_RESPONSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for single-turn generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send one fully rendered prompt and return the answer text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the provider reports an
    /// error or a block, or the response carries no answer.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
