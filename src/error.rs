use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Inverter unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed inverter response: {0}")]
    MalformedUpstreamResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// JSON-RPC error code used by the query endpoint.
    pub fn rpc_code(&self) -> i64 {
        match self {
            AppError::UpstreamUnavailable(_) => -32001,
            AppError::MalformedUpstreamResponse(_) => -32002,
            AppError::InvalidInput(_) => -32602,
            AppError::Config(_) | AppError::Internal(_) => -32603,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UpstreamUnavailable(ref reason) => {
                tracing::warn!("Inverter unavailable: {}", reason);
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
            AppError::MalformedUpstreamResponse(ref reason) => {
                tracing::warn!("Malformed inverter response: {}", reason);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Config(ref msg) | AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
