//! Logging, request correlation and Prometheus metrics.

pub mod logging;
pub mod metrics;

pub use self::logging::{init_logging, request_id_middleware, LogFormat, REQUEST_ID_HEADER};
pub use self::metrics::{init_metrics, metrics_handler, MetricsError};
