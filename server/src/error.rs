//! Error codes shared by service errors and relay responses.
//!
//! Every error surfaced over HTTP carries a grepable `E_*` code next to its
//! human-readable message. The message is what the chat widget shows; the code
//! is what shows up in logs and tests.

use serde::Serialize;

/// Grepable error code for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

/// Inner payload of an error response: `{ "error": { "code", "message" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// JSON error envelope returned by the relay on any failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl ErrorBody {
    /// Build an envelope from any coded error, using its `Display` as message.
    pub fn from_error(err: &(impl ErrorCode + ?Sized)) -> Self {
        Self { error: ErrorDetail { code: err.error_code(), message: err.to_string() } }
    }
}
