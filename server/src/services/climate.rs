//! Climate assistant: question → fixed prompt → LLM answer.
//!
//! DESIGN
//! ======
//! Single-turn and stateless. The prompt template pins the persona (UN SDG 13,
//! climate action) and tells the model to answer only climate questions and
//! to reply with [`CANNED_REFUSAL`] otherwise. Topic enforcement is entirely
//! the model's job: the service never classifies or filters questions itself,
//! and whatever text comes back is returned verbatim.

use tracing::{info, warn};

use crate::error::ErrorCode;
use crate::llm::LlmChat;
use crate::llm::types::LlmError;
use crate::state::AppState;

/// The sentence the model is told to use for off-topic questions.
pub const CANNED_REFUSAL: &str = "I am an AI assistant focused on climate action and can only answer questions on that topic. Please ask a relevant question.";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("Please enter a question.")]
    EmptyQuestion,
    #[error("The climate assistant is not configured on this server.")]
    LlmNotConfigured,
    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl ErrorCode for AskError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyQuestion => "E_EMPTY_QUESTION",
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(e) => e.error_code(),
        }
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// Render the full instructional prompt around one user question.
#[must_use]
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are an expert on the United Nations Sustainable Development Goal 13 (Climate Action). \
Your ONLY function is to answer questions about climate change, its impacts, and related solutions.

If the user asks a question that is NOT related to climate change, you MUST politely refuse and state your purpose. \
For example, say: \"{CANNED_REFUSAL}\"

Under no circumstances should you answer an off-topic question.

Here is the user's question:
User: \"{question}\"

Your Answer:"
    )
}

// =============================================================================
// ASK
// =============================================================================

/// Answer one question with the configured LLM.
///
/// # Errors
///
/// Returns [`AskError::EmptyQuestion`] for blank input,
/// [`AskError::LlmNotConfigured`] when the server has no LLM client, and
/// [`AskError::Llm`] for any provider failure.
pub async fn ask(state: &AppState, question: &str) -> Result<String, AskError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(AskError::EmptyQuestion);
    }
    let Some(llm) = state.llm.as_ref() else {
        return Err(AskError::LlmNotConfigured);
    };
    ask_with(llm.as_ref(), question).await
}

async fn ask_with(llm: &dyn LlmChat, question: &str) -> Result<String, AskError> {
    let prompt = build_prompt(question);
    match llm.generate(&prompt).await {
        Ok(answer) => {
            info!(question_len = question.len(), answer_len = answer.len(), "climate: answered");
            Ok(answer)
        }
        Err(e) => {
            warn!(error = %e, code = e.error_code(), "climate: LLM call failed");
            Err(AskError::Llm(e))
        }
    }
}

#[cfg(test)]
#[path = "climate_test.rs"]
mod tests;
