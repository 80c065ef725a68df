use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::{AppConfig, CorsConfig, ListingConfig, StoreBackend},
    database,
    error::{AppError, Result},
    planner::PageMath,
    routes,
    store::{MemoryProductStore, PgProductStore, ProductStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
    pub page_math: PageMath,
    pub seed_batch_size: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, listing: &ListingConfig) -> Self {
        Self {
            store,
            page_math: listing.page_math,
            seed_batch_size: listing.seed_batch_size,
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let store: Arc<dyn ProductStore> = match config.store {
        StoreBackend::Postgres => {
            let pool = database::create_pool(&config.database).await?;
            tracing::info!(
                "Postgres product store ready (acquire {:?}, round-trip deadline {:?})",
                config.database.acquire_timeout,
                config.database.query_timeout
            );
            Arc::new(PgProductStore::new(pool, config.database.query_timeout))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory product store; data is lost on restart");
            Arc::new(MemoryProductStore::new())
        }
    };
    let state = AppState::new(store, &config.listing);

    let app = routes::create_router()
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(cors.allow_origin(allowed_origins))
}
