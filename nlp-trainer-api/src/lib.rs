//! HTTP API of the NLP trainer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod observability;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use nlp_trainer_llm::ChatBridge;
use nlp_trainer_toolkit::Dispatcher;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

pub use dto::*;
pub use error::{ApiError, ApiResult};

/// Headroom for the JSON envelope around the text fields.
const ENVELOPE_BYTES: usize = 16 * 1024;

#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub chat: ChatBridge,
    /// Longest accepted text, in characters.
    pub max_text_length: usize,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, chat: ChatBridge, max_text_length: usize) -> Self {
        Self {
            dispatcher,
            chat,
            max_text_length,
        }
    }

    /// Byte cap for request bodies: two texts of the maximum length, each
    /// character escaped as `\uXXXX` at worst.
    pub fn body_limit_bytes(&self) -> usize {
        self.max_text_length
            .saturating_mul(2 * 6)
            .saturating_add(ENVELOPE_BYTES)
    }
}

/// The JSON API, to be nested under `/api`.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/process", post(handlers::nlp::process))
        .route("/sample-text", get(handlers::catalog::sample_text))
        .route("/explanation/:task", get(handlers::catalog::explanation))
        .route("/code-sample", get(handlers::catalog::code_sample))
        .route("/tasks", get(handlers::catalog::tasks))
        .route("/chat", post(handlers::chat::chat))
        .with_state(state)
}

/// The complete application: API, health and metrics endpoints, and the
/// request logging stack.
pub fn app(state: AppState) -> Router {
    let body_limit = state.body_limit_bytes();

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(observability::metrics_handler))
        .nest("/api", routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::from_fn(observability::request_id_middleware))
        .layer(TraceLayer::new_for_http())
}
