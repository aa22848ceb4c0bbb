//! Structured logging and request correlation.
//!
//! ```rust,no_run
//! use nlp_trainer_api::observability::logging::{init_logging, LogFormat};
//!
//! init_logging(LogFormat::Json, "info").expect("Failed to initialize logging");
//! ```

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

/// HTTP header for request correlation ID
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers
    Json,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(
    format: LogFormat,
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    match format {
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_thread_ids(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(json_layer).try_init()?;
        }
        LogFormat::Pretty => {
            let pretty_layer = fmt::layer()
                .pretty()
                .with_thread_names(true)
                .with_filter(env_filter);

            tracing_subscriber::registry().with(pretty_layer).try_init()?;
        }
    }

    tracing::info!("Logging system initialized with format: {:?}", format);
    Ok(())
}

/// Extract or generate request ID from headers
fn extract_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Tag every request with a correlation ID, log its outcome and echo the
/// ID back in the response headers.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = extract_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!("request", request.id = %request_id);
    let mut response = next.run(request).instrument(span).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::error!(
            request.id = %request_id,
            request.method = %method,
            request.path = %path,
            response.status = status.as_u16(),
            latency_ms,
            "Request completed with server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            request.id = %request_id,
            request.method = %method,
            request.path = %path,
            response.status = status.as_u16(),
            latency_ms,
            "Request completed with client error"
        );
    } else {
        tracing::info!(
            request.id = %request_id,
            request.method = %method,
            request.path = %path,
            response.status = status.as_u16(),
            latency_ms,
            "Request completed"
        );
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
