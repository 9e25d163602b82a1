//! Chat relay route.
//!
//! `POST /api/chat` takes `{ "question": "..." }` and answers with
//! `{ "text": "..." }` on success or the shared error envelope otherwise. The
//! status code tells the widget which side failed; the `error.message` is the
//! text it shows to the user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::ErrorBody;
use crate::services::climate::{self, AskError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub text: String,
}

pub(crate) fn ask_error_to_status(err: &AskError) -> StatusCode {
    match err {
        AskError::EmptyQuestion => StatusCode::BAD_REQUEST,
        AskError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        AskError::Llm(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/chat`: relay one question to the climate assistant.
pub async fn ask(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    match climate::ask(&state, &req.question).await {
        Ok(text) => Json(ChatReply { text }).into_response(),
        Err(e) => (ask_error_to_status(&e), Json(ErrorBody::from_error(&e))).into_response(),
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
