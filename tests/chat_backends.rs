//! Integration tests for the two chat backends.

use std::time::Duration;

use arglens::{AnalysisClient, CallOptions, ChatMode, Error};
use chrono::Utc;
use mockito::{Matcher, Server};
use serde_json::json;

const UNAVAILABLE: &str = "Chat service is currently unavailable. Please try again later.";

#[tokio::test(start_paused = true)]
async fn stub_chat_fails_with_fixed_message_after_fixed_delay() {
    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Stub)
        .build()
        .expect("failed to build client");

    let started = tokio::time::Instant::now();
    let err = client
        .send_chat_message("hello?", &CallOptions::default())
        .await
        .expect_err("stub chat must never succeed");

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(err.to_string(), UNAVAILABLE);
    assert!(matches!(err, Error::Provider { .. }));
}

#[tokio::test(start_paused = true)]
async fn stub_chat_honors_per_call_deadline() {
    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Stub)
        .build()
        .expect("failed to build client");

    // Deadline shorter than the fixed delay cuts the wait short.
    let started = tokio::time::Instant::now();
    let err = client
        .send_chat_message("hi", &CallOptions::with_timeout(Duration::from_millis(100)))
        .await
        .expect_err("stub chat must never succeed");
    assert!(started.elapsed() < Duration::from_secs(1));
    assert!(err.to_string().contains("timed out"));

    // A deadline longer than the delay leaves the fixed failure untouched.
    let err = client
        .send_chat_message("hi", &CallOptions::with_timeout(Duration::from_secs(5)))
        .await
        .expect_err("stub chat must never succeed");
    assert_eq!(err.to_string(), UNAVAILABLE);
}

#[tokio::test(start_paused = true)]
async fn stub_chat_fails_for_any_input() {
    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Stub)
        .build()
        .expect("failed to build client");

    for message in ["", "short", "a much longer chat message with punctuation!"] {
        let err = client
            .send_chat_message(message, &CallOptions::default())
            .await
            .expect_err("stub chat must never succeed");
        assert_eq!(err.to_string(), UNAVAILABLE);
    }
}

#[tokio::test]
async fn provider_chat_returns_first_choice_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [
                { "role": "system" },
                { "role": "user", "content": "hi" },
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"hello"}}]}"#)
        .create_async()
        .await;

    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Provider)
        .provider_base_url(server.url())
        .api_key("test-key")
        .build()
        .expect("failed to build client");

    let response = client
        .send_chat_message("hi", &CallOptions::default())
        .await
        .expect("provider chat failed");

    assert_eq!(response.message, "hello");
    let skew = (Utc::now() - response.timestamp).num_seconds().abs();
    assert!(skew <= 5, "timestamp should be close to now, skew was {skew}s");
    mock.assert_async().await;
}

#[tokio::test]
async fn provider_chat_without_content_uses_fallback_literal() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Provider)
        .provider_base_url(server.url())
        .api_key("test-key")
        .build()
        .expect("failed to build client");

    let response = client
        .send_chat_message("hi", &CallOptions::default())
        .await
        .expect("empty provider response is still a response");

    assert_eq!(response.message, "No response from OpenIA API.");
    mock.assert_async().await;
}

#[tokio::test]
async fn provider_chat_surfaces_http_failures_as_provider_errors() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let client = AnalysisClient::builder()
        .chat_mode(ChatMode::Provider)
        .provider_base_url(server.url())
        .api_key("test-key")
        .build()
        .expect("failed to build client");

    let err = client
        .send_chat_message("hi", &CallOptions::default())
        .await
        .expect_err("a 500 from the provider must fail");

    assert!(matches!(err, Error::Provider { .. }));
    assert!(err.to_string().contains("500"));
    mock.assert_async().await;
}
