use std::{env, time::Duration};

use crate::{
    error::{AppError, Result},
    planner::PageMath,
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreBackend,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Only required when the postgres backend is selected.
    pub url: Option<String>,
    pub max_connections: u32,
    /// Waiting for a pooled connection. Kept below `query_timeout` so an
    /// unreachable database surfaces as a store error, not a store timeout.
    pub acquire_timeout: Duration,
    /// Deadline for each store round-trip.
    pub query_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub page_math: PageMath,
    pub seed_batch_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let store = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "postgres".to_string())
            .as_str()
        {
            "postgres" => StoreBackend::Postgres,
            "memory" => StoreBackend::Memory,
            other => {
                return Err(AppError::ConfigError(format!(
                    "Invalid STORE_BACKEND value: {}",
                    other
                )));
            }
        };

        let url = env::var("DB_URL").ok();
        if store == StoreBackend::Postgres && url.is_none() {
            return Err(AppError::ConfigError(
                "DB_URL is required for the postgres store".to_string(),
            ));
        }

        let page_math = match env::var("PAGE_MATH")
            .unwrap_or_else(|_| "compatible".to_string())
            .as_str()
        {
            "compatible" => PageMath::Compatible,
            "corrected" => PageMath::Corrected,
            other => {
                return Err(AppError::ConfigError(format!(
                    "Invalid PAGE_MATH value: {}",
                    other
                )));
            }
        };

        let config = Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", "8000")?,
                max_body_size: parse_var("MAX_BODY_SIZE", "1048576")?,
            },
            store,
            database: DatabaseConfig {
                url,
                max_connections: parse_var("DB_MAX_CONNECTIONS", "20")?,
                acquire_timeout: Duration::from_secs(parse_var("DB_ACQUIRE_TIMEOUT_SECS", "5")?),
                query_timeout: Duration::from_secs(parse_var("DB_QUERY_TIMEOUT_SECS", "30")?),
            },
            cors: CorsConfig {
                allowed_origins: env::var("FRONTEND_URL")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            listing: ListingConfig {
                page_math,
                seed_batch_size: parse_var("SEED_BATCH_SIZE", "50")?,
            },
        };
        config.database.check_timeouts()?;

        Ok(config)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl DatabaseConfig {
    pub fn check_timeouts(&self) -> Result<()> {
        if self.acquire_timeout >= self.query_timeout {
            return Err(AppError::ConfigError(format!(
                "DB_ACQUIRE_TIMEOUT_SECS ({:?}) must be shorter than DB_QUERY_TIMEOUT_SECS ({:?})",
                self.acquire_timeout, self.query_timeout
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::ConfigError(format!("Invalid {} value", name)))
}
