use std::time::Duration;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("store did not answer within {0:?}")]
    StoreTimeout(Duration),
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
            }
            AppError::MigrationError(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                (StatusCode::SERVICE_UNAVAILABLE, "store unavailable")
            }
            AppError::StoreTimeout(deadline) => {
                tracing::error!("Store round-trip exceeded {:?}", deadline);
                (StatusCode::GATEWAY_TIMEOUT, "store timed out")
            }
            AppError::ConfigError(ref msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server configuration error",
                )
            }
            AppError::NotFound(ref msg) => (StatusCode::NOT_FOUND, msg.as_str()),
        };

        let body = Json(json!({
            "message": error_message,
        }));

        (status, body).into_response()
    }
}
