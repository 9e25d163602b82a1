use super::*;
use std::path::PathBuf;
use std::sync::Arc;

use crate::llm::LlmClient;
use crate::llm::config::{LlmConfig, LlmTimeouts};
use crate::llm::types::LlmError;
use crate::state::test_helpers::{self, MockLlm};

fn empty_site_dir() -> PathBuf {
    std::env::temp_dir().join("climate-chat-no-site")
}

/// Relay wired to a real Gemini client that talks to a local fake upstream.
async fn relay_against_upstream(status: u16, reply: serde_json::Value) -> (String, test_helpers::Upstream) {
    let upstream = test_helpers::spawn_upstream(status, reply).await;
    let config = LlmConfig {
        api_key: "server-side-key".into(),
        model: "gemini-test".into(),
        base_url: upstream.base_url.clone(),
        timeouts: LlmTimeouts { request_secs: 5, connect_secs: 2 },
    };
    let llm = LlmClient::from_config(config).unwrap();
    let state = test_helpers::test_app_state_with_llm(Arc::new(llm));
    let base = test_helpers::spawn_router(crate::routes::app(state, &empty_site_dir())).await;
    (base, upstream)
}

async fn post_question(base: &str, question: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&serde_json::json!({ "question": question }))
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

// =========================================================================
// status mapping
// =========================================================================

#[test]
fn status_for_empty_question_is_bad_request() {
    assert_eq!(ask_error_to_status(&AskError::EmptyQuestion), StatusCode::BAD_REQUEST);
}

#[test]
fn status_for_missing_llm_is_unavailable() {
    assert_eq!(ask_error_to_status(&AskError::LlmNotConfigured), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn status_for_upstream_failure_is_bad_gateway() {
    let err = AskError::Llm(LlmError::NoValidResponse);
    assert_eq!(ask_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

// =========================================================================
// relay round trips
// =========================================================================

#[tokio::test]
async fn relay_returns_answer_text() {
    let (base, upstream) = relay_against_upstream(
        200,
        serde_json::json!({ "candidates": [{ "content": { "parts": [{ "text": "It is a long-term shift." }] } }] }),
    )
    .await;

    let (status, body) = post_question(&base, "What is climate change?").await;
    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "text": "It is a long-term shift." }));

    let seen = upstream.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].key.as_deref(), Some("server-side-key"));
    let prompt = seen[0].body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("User: \"What is climate change?\""));
}

#[tokio::test]
async fn relay_forwards_upstream_error_message() {
    let (base, _upstream) =
        relay_against_upstream(500, serde_json::json!({ "error": { "message": "Internal error" } })).await;

    let (status, body) = post_question(&base, "What is climate change?").await;
    assert_eq!(status, 502);
    assert_eq!(body["error"]["message"], "Internal error");
    assert_eq!(body["error"]["code"], "E_API_RESPONSE");
}

#[tokio::test]
async fn relay_reports_no_valid_response() {
    let (base, _upstream) = relay_against_upstream(200, serde_json::json!({ "candidates": [] })).await;

    let (status, body) = post_question(&base, "What is climate change?").await;
    assert_eq!(status, 502);
    assert_eq!(body["error"]["message"], "No valid response was received from the API.");
}

#[tokio::test]
async fn relay_reports_block_reason() {
    let (base, _upstream) =
        relay_against_upstream(200, serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } })).await;

    let (_, body) = post_question(&base, "What is climate change?").await;
    assert_eq!(body["error"]["message"], "Request was blocked: SAFETY. Please rephrase your question.");
    assert_eq!(body["error"]["code"], "E_BLOCKED");
}

#[tokio::test]
async fn relay_rejects_blank_question_without_upstream_call() {
    let (base, upstream) = relay_against_upstream(200, serde_json::json!({})).await;

    let (status, body) = post_question(&base, "   ").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "E_EMPTY_QUESTION");
    assert!(upstream.requests().is_empty());
}

#[tokio::test]
async fn relay_without_llm_is_unavailable() {
    let state = test_helpers::test_app_state();
    let base = test_helpers::spawn_router(crate::routes::app(state, &empty_site_dir())).await;

    let (status, body) = post_question(&base, "What is climate change?").await;
    assert_eq!(status, 503);
    assert_eq!(body["error"]["code"], "E_LLM_NOT_CONFIGURED");
}

#[tokio::test]
async fn concurrent_questions_are_independent() {
    let llm = Arc::new(MockLlm::new(vec![Ok("first".into()), Ok("second".into())]));
    let state = test_helpers::test_app_state_with_llm(llm.clone());
    let base = test_helpers::spawn_router(crate::routes::app(state, &empty_site_dir())).await;

    let (a, b) = tokio::join!(post_question(&base, "Q1"), post_question(&base, "Q2"));
    assert_eq!(a.0, 200);
    assert_eq!(b.0, 200);
    let mut texts = vec![a.1["text"].as_str().unwrap().to_string(), b.1["text"].as_str().unwrap().to_string()];
    texts.sort();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(llm.prompts().len(), 2);
}

// =========================================================================
// static site + health
// =========================================================================

#[tokio::test]
async fn healthz_is_ok() {
    let base = test_helpers::spawn_router(crate::routes::app(test_helpers::test_app_state(), &empty_site_dir())).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn relay_grants_no_cross_origin_access() {
    let llm = Arc::new(MockLlm::answering("Sea levels are rising."));
    let state = test_helpers::test_app_state_with_llm(llm);
    let base = test_helpers::spawn_router(crate::routes::app(state, &empty_site_dir())).await;
    let client = reqwest::Client::new();

    let preflight = client
        .request(reqwest::Method::OPTIONS, format!("{base}/api/chat"))
        .header("Origin", "https://elsewhere.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .unwrap();
    assert!(preflight.headers().get("access-control-allow-origin").is_none());

    let post = client
        .post(format!("{base}/api/chat"))
        .header("Origin", "https://elsewhere.example")
        .json(&serde_json::json!({ "question": "Why are sea levels rising?" }))
        .send()
        .await
        .unwrap();
    assert!(post.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn static_index_is_served_at_root() {
    let dir = std::env::temp_dir().join(format!("climate-chat-site-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<canvas id=\"bg-canvas\"></canvas>").unwrap();

    let base = test_helpers::spawn_router(crate::routes::app(test_helpers::test_app_state(), &dir)).await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.text().await.unwrap().contains("bg-canvas"));

    std::fs::remove_dir_all(&dir).unwrap();
}
