use axum::{
    extract::{Path, Query},
    Json,
};
use nlp_trainer_core::{
    code_sample as lookup_code_sample, explain, explain_task, sample_text as lookup_sample_text,
    Task, DEFAULT_CODE_SAMPLE, DEFAULT_SAMPLE_TEXT,
};

use crate::{
    dto::*,
    error::{ApiError, ApiResult},
};

pub async fn sample_text(Query(query): Query<SampleTextQuery>) -> Json<SampleTextResponse> {
    let name = query.task.as_deref().unwrap_or(Task::Tokenization.as_str());

    let response = match name.parse::<Task>() {
        Ok(task) => {
            let sample = lookup_sample_text(task);
            SampleTextResponse {
                success: true,
                text: sample.text,
                comparison_text: sample.comparison_text,
                error: None,
            }
        }
        Err(_) => SampleTextResponse {
            success: false,
            text: DEFAULT_SAMPLE_TEXT,
            comparison_text: None,
            error: Some("Sample text not found for the specified task"),
        },
    };

    Json(response)
}

pub async fn explanation(Path(task): Path<String>) -> Json<ExplanationResponse> {
    Json(ExplanationResponse {
        success: true,
        explanation: explain(&task),
    })
}

pub async fn code_sample(Query(query): Query<CodeSampleQuery>) -> ApiResult<Json<CodeSampleResponse>> {
    let kind = query.kind.as_deref().unwrap_or(DEFAULT_CODE_SAMPLE);

    lookup_code_sample(kind)
        .map(|code| Json(CodeSampleResponse { success: true, code }))
        .ok_or_else(|| ApiError::NotFound("Code sample not found for the specified type".to_string()))
}

pub async fn tasks() -> Json<TaskListResponse> {
    let tasks = Task::ALL
        .into_iter()
        .map(|task| TaskSummary {
            name: task,
            title: explain_task(task).title,
            needs_comparison: task.needs_comparison(),
        })
        .collect();

    Json(TaskListResponse {
        success: true,
        tasks,
    })
}
