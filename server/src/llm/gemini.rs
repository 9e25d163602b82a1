//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `POST {base}/models/{model}:generateContent`. The
//! API key travels as the `key` query parameter and never leaves the server.
//! Pure parsing in [`parse_generate_response`] and [`parse_error_message`]
//! for testability.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::LlmError;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client for the given base URL (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// Send one prompt and return the first candidate's text.
    ///
    /// # Errors
    ///
    /// Transport failures map to [`LlmError::ApiRequest`], non-2xx statuses to
    /// [`LlmError::ApiResponse`], and empty or blocked answers to
    /// [`LlmError::NoValidResponse`] / [`LlmError::Blocked`].
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateRequest::single_prompt(prompt);
        let response = self
            .http
            .post(generate_url(&self.base_url, model))
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::from_status(status.as_u16(), parse_error_message(&text)));
        }

        parse_generate_response(&text)
    }
}

pub(crate) fn generate_url(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateRequest<'a> {
    pub(crate) fn single_prompt(text: &'a str) -> Self {
        Self { contents: [RequestContent { parts: [RequestPart { text }] }] }
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

/// Extract the answer from a 2xx body: `candidates[0].content.parts[0].text`.
pub(crate) fn parse_generate_response(json_text: &str) -> Result<String, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let content = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|candidate| candidate.get("content"))
        .filter(|content| !content.is_null());

    let Some(content) = content else {
        let reason = root
            .get("promptFeedback")
            .and_then(|f| f.get("blockReason"))
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty());
        return Err(match reason {
            Some(reason) => LlmError::Blocked { reason: reason.to_string() },
            None => LlmError::NoValidResponse,
        });
    };

    content
        .get("parts")
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| LlmError::ApiParse("candidates[0].content.parts[0].text missing".to_string()))
}

/// Pull `error.message` out of a failure body, if the body has one.
pub(crate) fn parse_error_message(json_text: &str) -> Option<String> {
    let root: Value = serde_json::from_str(json_text).ok()?;
    root.get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
