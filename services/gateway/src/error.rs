use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use types::errors::{EngineError, ValidationError};

/// Central error type for the gateway application
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No pending orders")]
    QueueEmpty,

    #[error("No pending order is fulfillable with current stock")]
    NoFulfillableOrder,

    #[error("Internal server error")]
    Internal(String),
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(err) => AppError::Validation(err),
            EngineError::EmptyQueue => AppError::QueueEmpty,
            EngineError::NoFulfillableOrder => AppError::NoFulfillableOrder,
            // Unreachable through the serialized engine; surfaced as a
            // generic 500 rather than a normal response if it ever fires.
            EngineError::Ledger(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, field, message) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                Some(err.field()),
                err.to_string(),
            ),
            AppError::QueueEmpty => (
                StatusCode::NOT_FOUND,
                "QUEUE_EMPTY",
                None,
                "no pending orders".to_string(),
            ),
            AppError::NoFulfillableOrder => (
                StatusCode::CONFLICT,
                "NO_FULFILLABLE_ORDER",
                None,
                "pending orders exist but none can be satisfied by current stock".to_string(),
            ),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    None,
                    "Internal server error".to_string(),
                )
            }
        };

        let mut body = json!({
            "error": code,
            "message": message
        });
        if let Some(field) = field {
            body["field"] = json!(field);
        }

        (status, Json(body)).into_response()
    }
}
