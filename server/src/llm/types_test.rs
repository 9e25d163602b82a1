use super::*;
use crate::error::ErrorCode;

// =============================================================================
// LlmError::error_code
// =============================================================================

#[test]
fn error_code_config_parse() {
    let err = LlmError::ConfigParse("bad".into());
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn error_code_missing_api_key() {
    let err = LlmError::MissingApiKey { var: "KEY".into() };
    assert_eq!(err.error_code(), "E_MISSING_API_KEY");
}

#[test]
fn error_code_api_request() {
    let err = LlmError::ApiRequest("timeout".into());
    assert_eq!(err.error_code(), "E_API_REQUEST");
}

#[test]
fn error_code_api_response() {
    let err = LlmError::from_status(500, None);
    assert_eq!(err.error_code(), "E_API_RESPONSE");
}

#[test]
fn error_code_blocked_and_no_valid_response() {
    assert_eq!(LlmError::Blocked { reason: "SAFETY".into() }.error_code(), "E_BLOCKED");
    assert_eq!(LlmError::NoValidResponse.error_code(), "E_NO_VALID_RESPONSE");
}

// =============================================================================
// Display: user-facing messages
// =============================================================================

#[test]
fn status_error_prefers_embedded_message() {
    let err = LlmError::from_status(500, Some("Internal error".into()));
    assert_eq!(err.to_string(), "Internal error");
}

#[test]
fn status_error_falls_back_to_status_line() {
    let err = LlmError::from_status(503, None);
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[test]
fn status_error_ignores_blank_message() {
    let err = LlmError::from_status(400, Some("   ".into()));
    assert_eq!(err.to_string(), "HTTP error! status: 400");
}

#[test]
fn blocked_message_names_reason() {
    let err = LlmError::Blocked { reason: "SAFETY".into() };
    assert_eq!(err.to_string(), "Request was blocked: SAFETY. Please rephrase your question.");
}

#[test]
fn no_valid_response_message() {
    assert_eq!(LlmError::NoValidResponse.to_string(), "No valid response was received from the API.");
}

#[test]
fn transport_error_is_passed_through() {
    let err = LlmError::ApiRequest("error sending request".into());
    assert_eq!(err.to_string(), "error sending request");
}
