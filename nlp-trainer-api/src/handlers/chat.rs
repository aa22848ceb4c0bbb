use axum::{extract::rejection::JsonRejection, extract::State, Json};
use nlp_trainer_core::validate_text_length;
use nlp_trainer_llm::ChatPrompt;
use serde_json::Value;

use super::parse_body;
use crate::{
    dto::{ChatRequest, ChatResponse},
    error::ApiResult,
    observability::metrics,
    AppState,
};

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let payload: ChatRequest = parse_body(payload)?;
    let prompt = payload.into_prompt()?;

    let body = match &prompt {
        ChatPrompt::General { question } => question,
        ChatPrompt::CodeExplanation { code } | ChatPrompt::LibraryComparison { code, .. } => code,
    };
    validate_text_length(body, state.max_text_length)?;

    let reply = state.chat.respond(&prompt).await;
    metrics::record_chat(prompt.kind(), !reply.degraded);

    Ok(Json(ChatResponse {
        success: true,
        response: reply.text,
    }))
}
