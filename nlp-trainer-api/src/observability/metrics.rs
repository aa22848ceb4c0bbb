//! Prometheus metrics.
//!
//! The recorder is process-global; [`init_metrics`] installs it once and
//! later calls are no-ops. Without it the recording helpers do nothing.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use nlp_trainer_core::{Backend, Task};
use nlp_trainer_llm::ChatKind;
use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::error;

pub const TASKS_TOTAL: &str = "nlp_tasks_total";
pub const CHAT_REQUESTS_TOTAL: &str = "nlp_chat_requests_total";
pub const TASK_DURATION_SECONDS: &str = "nlp_task_duration_seconds";

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Failed to install metrics recorder: {0}")]
    Installation(String),
}

pub fn init_metrics() -> Result<(), MetricsError> {
    PROMETHEUS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(TASK_DURATION_SECONDS.to_string()),
                &[0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5],
            )
            .map_err(|e| MetricsError::Installation(e.to_string()))?
            .install_recorder()
            .map_err(|e| MetricsError::Installation(e.to_string()))?;

        register_metric_descriptions();
        Ok::<_, MetricsError>(handle)
    })?;
    Ok(())
}

fn register_metric_descriptions() {
    describe_counter!(TASKS_TOTAL, "NLP task requests by task, library and outcome");
    describe_counter!(CHAT_REQUESTS_TOTAL, "Chat requests by message type and outcome");
    describe_histogram!(
        TASK_DURATION_SECONDS,
        Unit::Seconds,
        "Time spent running a single NLP task"
    );
}

fn outcome(ok: bool) -> &'static str {
    if ok {
        "success"
    } else {
        "error"
    }
}

pub fn record_task(task: Task, backend: Backend, ok: bool, duration: Duration) {
    counter!(
        TASKS_TOTAL,
        "task" => task.as_str(),
        "backend" => backend.as_str(),
        "outcome" => outcome(ok)
    )
    .increment(1);
    histogram!(TASK_DURATION_SECONDS, "task" => task.as_str()).record(duration.as_secs_f64());
}

/// `ok` is false when the bridge answered with an apology.
pub fn record_chat(kind: ChatKind, ok: bool) {
    counter!(
        CHAT_REQUESTS_TOTAL,
        "kind" => kind.as_str(),
        "outcome" => if ok { "success" } else { "degraded" }
    )
    .increment(1);
}

pub async fn metrics_handler() -> Response {
    match PROMETHEUS_HANDLE.get() {
        Some(handle) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => {
            error!("Metrics handler called but metrics not initialized");
            (StatusCode::INTERNAL_SERVER_ERROR, "Metrics not initialized").into_response()
        }
    }
}
