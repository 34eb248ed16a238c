//! Pronunciation analyze API tests.

mod common;

use axum::http::StatusCode;

use common::fixtures;
use common::TestContext;
use pronunciation_backend::models::FeedbackLocale;

/// Test a one-letter substitution scores 80.
#[tokio::test]
async fn test_analyze_single_substitution() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request("hello", "hallo"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accuracy"], 80);
    assert_eq!(body["targetWord"], "hello");
    assert_eq!(body["recognizedWord"], "hallo");
    assert_eq!(body["tier"], "medium");
    assert_eq!(body["feedback"], "Good pronunciation. Practice a little more.");
}

/// Test case and edge whitespace do not affect the score.
#[tokio::test]
async fn test_analyze_ignores_case_and_whitespace() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request("Hello", "  hello "))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accuracy"], 100);
    assert_eq!(body["tier"], "high");
    // Original inputs are echoed back untouched
    assert_eq!(body["recognizedWord"], "  hello ");
}

/// Test empty transcripts score zero instead of failing.
#[tokio::test]
async fn test_analyze_empty_transcript() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request("cat", ""))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accuracy"], 0);
    assert_eq!(body["tier"], "low");
}

/// Test the th hint comes back in the middle band.
#[tokio::test]
async fn test_analyze_th_hint() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request("think", "sink"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["accuracy"], 60);
    assert!(body["feedback"].as_str().unwrap().contains("\"th\""));
}

/// Test request locale overrides the configured one.
#[tokio::test]
async fn test_analyze_locale_override() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request_in("cat", "cat", "ja"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["feedback"], "素晴らしい発音です！");
}

/// Test configured locale is used when the request has none.
#[tokio::test]
async fn test_analyze_configured_locale() {
    let ctx = TestContext::with_locale(FeedbackLocale::Ja);
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request("cat", "dog"))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["feedback"],
        "もう一度挑戦してみましょう。音声をよく聞いて真似してみてください。"
    );
}

/// Test unknown locales are rejected.
#[tokio::test]
async fn test_analyze_unknown_locale() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .post("/api/pronunciation/analyze")
        .json(&fixtures::analyze_request_in("cat", "cat", "xx"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

/// Test health endpoint.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}
