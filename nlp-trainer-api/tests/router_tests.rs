use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use nlp_trainer_api::{app, observability::REQUEST_ID_HEADER, AppState};
use nlp_trainer_core::{Backend, DEFAULT_SAMPLE_TEXT};
use nlp_trainer_llm::{ChatBridge, LlmResult, TextGenerator, UNAVAILABLE};
use nlp_trainer_toolkit::{Dispatcher, Toolkit};
use once_cell::sync::Lazy;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use tower::ServiceExt;

static TOOLKIT: Lazy<Arc<Toolkit>> = Lazy::new(|| Arc::new(Toolkit::load()));

// ===== Test Helper Functions =====

#[derive(Default)]
struct CannedGenerator {
    configured: bool,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &str) -> LlmResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("Tokens are the units a text is split into.".to_string())
    }
}

fn state_with(generator: Arc<CannedGenerator>, max_text_length: usize) -> AppState {
    AppState::new(
        Dispatcher::new(TOOLKIT.clone(), Backend::Nltk),
        ChatBridge::new(generator),
        max_text_length,
    )
}

fn test_app() -> Router {
    let generator = Arc::new(CannedGenerator {
        configured: true,
        ..Default::default()
    });
    app(state_with(generator, 100_000))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, headers, body)
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

// ===== Task processing =====

#[tokio::test]
async fn test_process_tokenization_counts_words() {
    let (status, body) = send_json(
        test_app(),
        post_json(
            "/api/process",
            json!({"task": "tokenization", "library": "nltk", "text": "hello world"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["result"]["word_count"], 2);
    assert_eq!(body["result"]["words"], json!(["hello", "world"]));
    assert_eq!(body["visualization"], Value::Null);
}

#[tokio::test]
async fn test_process_sentiment_returns_chart() {
    let (status, body) = send_json(
        test_app(),
        post_json(
            "/api/process",
            json!({"task": "sentiment_analysis", "library": "spacy", "text": "I love this great product"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["sentiment"], "Positive");
    let names: Vec<&str> = body["visualization"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Positive", "Neutral", "Negative"]);
}

#[tokio::test]
async fn test_process_similarity_returns_summary() {
    let (status, body) = send_json(
        test_app(),
        post_json(
            "/api/process",
            json!({
                "task": "text_similarity",
                "text": "Cats chase mice in the garden.",
                "comparison_text": "Cats chase mice in the garden."
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let score = body["result"]["similarity_score"].as_f64().unwrap();
    assert!((score - 1.0).abs() < 1e-9);
    assert_eq!(body["visualization"]["text1_unique_count"], 0);
}

#[tokio::test]
async fn test_unknown_library_falls_back_to_default() {
    let (status, body) = send_json(
        test_app(),
        post_json(
            "/api/process",
            json!({"task": "pos_tagging", "library": "stanza", "text": "The dog barked"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["pos_tags"][0], json!(["The", "DT"]));
}

#[rstest]
#[case(json!({"task": "tokenization", "text": ""}), "Text input cannot be empty")]
#[case(json!({"task": "tokenization", "text": null}), "Text input cannot be empty")]
#[case(json!({"task": "tokenization"}), "Text input cannot be empty")]
#[case(json!({"task": "tokenization", "text": "hi"}), "Text input must be at least 3 characters long")]
#[case(
    json!({"task": "text_summarization", "text": "Too short to summarize."}),
    "For text summarization, input must be at least 200 characters long"
)]
#[case(
    json!({"task": "text_similarity", "text": "some text"}),
    "Comparison text is required for text similarity analysis"
)]
#[case(
    json!({"task": "text_similarity", "text": "some text", "comparison_text": "ab"}),
    "Comparison text must be at least 3 characters long"
)]
#[case(json!({"task": "translation", "text": "hello world"}), "Unsupported task: translation")]
#[tokio::test]
async fn test_process_rejects_bad_input(#[case] request: Value, #[case] expected: &str) {
    let (status, body) = send_json(test_app(), post_json("/api/process", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": expected}));
}

#[tokio::test]
async fn test_process_rejects_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send_json(test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request data"}));

    let (status, body) = send_json(test_app(), post_json("/api/process", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid request data"}));
}

#[tokio::test]
async fn test_process_enforces_length_limit() {
    let generator = Arc::new(CannedGenerator::default());
    let app = app(state_with(generator, 20));
    let (status, body) = send_json(
        app,
        post_json(
            "/api/process",
            json!({"task": "tokenization", "text": "This sentence is longer than twenty characters."}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Text input must be at most 20 characters long"}));
}

// ===== Catalog =====

#[tokio::test]
async fn test_sample_text_defaults_to_tokenization() {
    let (status, body) = send_json(test_app(), get("/api/sample-text")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "text": "The quick brown fox jumps over the lazy dog. This is a sample sentence for tokenization."
        })
    );
}

#[tokio::test]
async fn test_sample_text_for_similarity_has_pair() {
    let (_, body) = send_json(test_app(), get("/api/sample-text?task=text_similarity")).await;

    assert_eq!(body["success"], true);
    assert!(body["comparison_text"].as_str().unwrap().starts_with("NLP is a branch of AI"));
}

#[tokio::test]
async fn test_sample_text_unknown_task() {
    let (status, body) = send_json(test_app(), get("/api/sample-text?task=translation")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Sample text not found for the specified task",
            "text": DEFAULT_SAMPLE_TEXT
        })
    );
}

#[tokio::test]
async fn test_explanation_lookup() {
    let (status, body) = send_json(test_app(), get("/api/explanation/ner")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["explanation"]["how"]["spacy"].is_string());

    let (status, body) = send_json(test_app(), get("/api/explanation/translation")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["explanation"]["title"], "Unknown Task");
}

#[tokio::test]
async fn test_code_sample() {
    let (status, body) = send_json(test_app(), get("/api/code-sample")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["code"].as_str().unwrap().contains("nltk"));

    let (status, body) = send_json(test_app(), get("/api/code-sample?type=gensim-lda")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "error": "Code sample not found for the specified type"})
    );
}

#[tokio::test]
async fn test_task_listing() {
    let (status, body) = send_json(test_app(), get("/api/tasks")).await;

    assert_eq!(status, StatusCode::OK);
    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 10);
    assert_eq!(tasks[0]["name"], "tokenization");
    assert_eq!(tasks[8]["needs_comparison"], true);
}

// ===== Chat =====

#[tokio::test]
async fn test_chat_general_question() {
    let generator = Arc::new(CannedGenerator {
        configured: true,
        ..Default::default()
    });
    let app = app(state_with(generator.clone(), 100_000));
    let (status, body) = send_json(
        app,
        post_json("/api/chat", json!({"message": "What is a token?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": true, "response": "Tokens are the units a text is split into."})
    );
    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("Question: What is a token?"));
}

#[tokio::test]
async fn test_chat_library_comparison_defaults() {
    let generator = Arc::new(CannedGenerator {
        configured: true,
        ..Default::default()
    });
    let app = app(state_with(generator.clone(), 100_000));
    let (status, _) = send_json(
        app,
        post_json(
            "/api/chat",
            json!({"type": "library_comparison", "code": "nltk.word_tokenize(text)"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let prompts = generator.prompts.lock().unwrap();
    assert!(prompts[0].contains("Convert the following nltk code to equivalent spacy code"));
    assert!(prompts[0].contains("performance differences"));
}

#[tokio::test]
async fn test_chat_without_api_key_degrades() {
    let generator = Arc::new(CannedGenerator::default());
    let app = app(state_with(generator.clone(), 100_000));
    let (status, body) = send_json(
        app,
        post_json("/api/chat", json!({"type": "code_explanation", "code": "print(1)"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "response": UNAVAILABLE}));
    assert!(generator.prompts.lock().unwrap().is_empty());
}

#[rstest]
#[case(json!({"type": "general", "message": ""}), "Message cannot be empty")]
#[case(json!({"type": "code_explanation"}), "Code cannot be empty")]
#[case(json!({"type": "library_comparison", "code": ""}), "Code cannot be empty")]
#[case(json!({"type": "haiku", "message": "hi"}), "Invalid message type")]
#[tokio::test]
async fn test_chat_rejects_bad_input(#[case] request: Value, #[case] expected: &str) {
    let (status, body) = send_json(test_app(), post_json("/api/chat", request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": expected}));
}

// ===== Service endpoints =====

#[tokio::test]
async fn test_health_check() {
    let (status, _, body) = send(test_app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_request_id_is_echoed_or_generated() {
    let request = Request::builder()
        .uri("/health")
        .header(REQUEST_ID_HEADER, "trace-42")
        .body(Body::empty())
        .unwrap();
    let (_, headers, _) = send(test_app(), request).await;
    assert_eq!(headers[REQUEST_ID_HEADER], "trace-42");

    let (_, headers, _) = send(test_app(), get("/health")).await;
    assert!(headers.contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn test_metrics_endpoint_renders_task_counters() {
    nlp_trainer_api::observability::init_metrics().unwrap();
    send_json(
        test_app(),
        post_json("/api/process", json!({"task": "ner", "text": "Paris is lovely in spring."})),
    )
    .await;

    let (status, _, body) = send(test_app(), get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("nlp_tasks_total"));
}
