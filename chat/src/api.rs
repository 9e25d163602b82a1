//! Relay API: one question out, one answer (or error message) back.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` to the server's
//! `/api/chat` relay, which holds the generative-language API key.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a [`ChatError`] whose `Display` is the human-readable
//! reason the controller splices into "Sorry, an error occurred: ...". A
//! structured `error.message` from the relay always wins over a generic
//! status line.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::Value;

/// Relay endpoint, relative to the page origin.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Errors surfaced to the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The request never produced a response (network down, CORS, etc.).
    #[error("{0}")]
    Transport(String),

    /// The relay answered with a failure status.
    #[error("{0}")]
    Service(String),

    /// A success status without a usable answer.
    #[error("No valid response was received from the API.")]
    NoValidResponse,

    /// A success status whose body is not JSON.
    #[error("malformed reply: {0}")]
    Malformed(String),
}

/// Request body for [`CHAT_ENDPOINT`].
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
}

/// Something that can answer one question. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ChatBackend {
    /// Ask one question and return the answer text verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] describing why no answer is available.
    async fn ask(&self, question: &str) -> Result<String, ChatError>;
}

fn http_error_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Interpret a relay response.
///
/// # Errors
///
/// Non-2xx statuses become [`ChatError::Service`] carrying the relay's
/// `error.message` (or a status line); 2xx bodies without `text` become
/// [`ChatError::NoValidResponse`].
pub fn parse_reply(status: u16, body: &str) -> Result<String, ChatError> {
    let parsed = serde_json::from_str::<Value>(body);

    if !(200..300).contains(&status) {
        let embedded = match &parsed {
            Ok(root) => root
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .filter(|m| !m.trim().is_empty()),
            Err(_) => None,
        };
        let message = embedded.map_or_else(|| http_error_message(status), str::to_owned);
        return Err(ChatError::Service(message));
    }

    let root = parsed.map_err(|e| ChatError::Malformed(e.to_string()))?;
    root.get("text")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ChatError::NoValidResponse)
}

// =============================================================================
// RELAY BACKEND
// =============================================================================

/// Backend that posts to the server relay.
#[derive(Clone, Debug)]
pub struct RelayBackend {
    endpoint: String,
}

impl Default for RelayBackend {
    fn default() -> Self {
        Self::new(CHAT_ENDPOINT)
    }
}

impl RelayBackend {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ChatBackend for RelayBackend {
    async fn ask(&self, question: &str) -> Result<String, ChatError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(&ChatRequest { question })
                .map_err(|e| ChatError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChatError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| ChatError::Transport(e.to_string()))?;
            parse_reply(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ChatError::Transport(format!("cannot send {question:?} outside the browser")))
        }
    }
}
