use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::assessment::{CallbackError, LookupError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Application-boundary error covering startup and server faults. Command
/// failures never reach this type; the webhook contract maps them to fixed
/// 200-text responses instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("gateway initialization failed: {0}")]
    Gateway(#[from] LookupError),
    #[error("callback publisher initialization failed: {0}")]
    Callback(#[from] CallbackError),
    #[error("demo input error: {0}")]
    DemoInput(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::DemoInput(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Gateway(_)
            | AppError::Callback(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
