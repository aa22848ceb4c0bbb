use std::time::Instant;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use nlp_trainer_core::{validate_text_input, validate_text_length, Backend, CoreError, Task, TaskRequest};
use serde_json::Value;

use super::parse_body;
use crate::{
    dto::{ProcessRequest, ProcessResponse},
    error::{ApiError, ApiResult},
    observability::metrics,
    AppState,
};

pub async fn process(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let payload: ProcessRequest = parse_body(payload)?;
    let comparison = payload.comparison();

    validate_text_length(payload.text(), state.max_text_length)?;
    if let Some(comparison) = comparison {
        validate_text_length(comparison, state.max_text_length)?;
    }

    let task_name = payload.task.as_deref().unwrap_or_default();
    let task = task_name.parse::<Task>().ok();
    validate_text_input(payload.text(), task, comparison)?;
    let task = task.ok_or_else(|| CoreError::UnsupportedTask(task_name.to_string()))?;

    let backend = Backend::normalize(
        payload.library.as_deref(),
        state.dispatcher.default_backend(),
    );
    let mut request = TaskRequest::new(task, backend, payload.text());
    if let Some(comparison) = comparison {
        request = request.with_comparison(comparison);
    }

    let dispatcher = state.dispatcher.clone();
    let started = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || dispatcher.dispatch(&request))
        .await
        .map_err(|err| ApiError::Internal(format!("Task worker failed: {}", err)))?;
    metrics::record_task(task, backend, outcome.is_ok(), started.elapsed());

    Ok(Json(ProcessResponse::from(outcome?)))
}
