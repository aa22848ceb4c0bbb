pub mod catalog;
pub mod chat;
pub mod nlp;

use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

pub async fn health_check() -> &'static str {
    "OK"
}

/// Decode a JSON body, reporting every kind of unusable body (missing,
/// malformed, empty, wrong shape) as `Invalid request data`.
pub(crate) fn parse_body<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<T> {
    let Json(value) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected request body");
        ApiError::invalid_request_data()
    })?;

    let empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(ApiError::invalid_request_data());
    }

    serde_json::from_value(value).map_err(|err| {
        debug!(error = %err, "Request body has the wrong shape");
        ApiError::invalid_request_data()
    })
}
