use std::sync::Arc;
use std::time::Duration;

use nlp_trainer_llm::{prompts, ChatBridge, ChatPrompt, GeminiClient, GeminiConfig, LlmError, TextGenerator};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

fn client_for(server: &MockServer, key: &str) -> GeminiClient {
    GeminiClient::new(
        GeminiConfig::new(key)
            .with_base_url(format!("{}/v1beta", server.uri()))
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn generate_posts_prompt_and_reads_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "secret"))
        .and(body_json(json!({"contents": [{"parts": [{"text": "Explain stemming"}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Stemming chops suffixes.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server, "secret").generate("Explain stemming").await.unwrap();
    assert_eq!(text, "Stemming chops suffixes.");
}

#[tokio::test]
async fn api_errors_carry_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"code": 403, "message": "Permission denied", "status": "PERMISSION_DENIED"}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server, "secret").generate("hi").await.unwrap_err();
    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Permission denied");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_are_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let err = client_for(&server, "secret").generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
async fn missing_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client_for(&server, "").generate("hi").await.unwrap_err();
    assert!(matches!(err, LlmError::NotConfigured));
}

#[tokio::test]
async fn bridge_sends_comparison_prompt_and_returns_model_text() {
    let server = MockServer::start().await;
    let expected_prompt = prompts::library_comparison("nltk.pos_tag(tokens)", "nltk", "spacy", true);
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_json(json!({"contents": [{"parts": [{"text": expected_prompt}]}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Use token.pos_")))
        .expect(1)
        .mount(&server)
        .await;

    let bridge = ChatBridge::new(Arc::new(client_for(&server, "secret")));
    let reply = bridge
        .respond(&ChatPrompt::LibraryComparison {
            code: "nltk.pos_tag(tokens)".into(),
            source_library: "nltk".into(),
            target_library: "spacy".into(),
            include_performance: true,
        })
        .await;
    assert_eq!(reply.text, "Use token.pos_");
    assert!(!reply.degraded);
}

#[tokio::test]
async fn bridge_apologises_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let bridge = ChatBridge::new(Arc::new(client_for(&server, "secret")));
    let reply = bridge
        .respond(&ChatPrompt::General {
            question: "What is a corpus?".into(),
        })
        .await;
    assert!(reply.degraded);
    assert_eq!(
        reply.text,
        "Sorry, I couldn't generate a response due to an error: API error: 500 - internal"
    );
}
