mod health;
mod products;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use crate::{AppState, error::AppError};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/products/populate", post(products::populate))
        .route("/api/products/frontend", get(products::list_frontend))
        .route("/api/products/backend", get(products::list_backend))
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}
