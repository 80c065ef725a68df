#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use catalog_search::{
    AppError, AppState, Result,
    config::ListingConfig,
    models::{NewProduct, Product},
    planner::{PageMath, PriceSort, ProductFilter},
    routes,
    store::{MemoryProductStore, ProductStore},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn app_with(store: Arc<dyn ProductStore>, page_math: PageMath) -> Router {
    let listing = ListingConfig {
        page_math,
        seed_batch_size: 50,
    };
    routes::create_router().with_state(AppState::new(store, &listing))
}

pub fn app(products: Vec<NewProduct>) -> Router {
    app_with(
        Arc::new(MemoryProductStore::with_products(products)),
        PageMath::Compatible,
    )
}

pub fn product(title: &str, description: &str, price: i32) -> NewProduct {
    NewProduct {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        image: Some("http://lorempixel.com/200/200?test".to_string()),
        price: Some(price),
    }
}

pub fn numbered(n: usize) -> Vec<NewProduct> {
    (0..n)
        .map(|i| product(&format!("item {}", i), "plain", (i % 90) as i32 + 10))
        .collect()
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri).await
}

pub fn prices(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_i64().unwrap())
        .collect()
}

/// Store whose every round-trip fails, as if the database were unreachable.
pub struct UnavailableStore;

#[async_trait]
impl ProductStore for UnavailableStore {
    async fn find(&self, _: &ProductFilter, _: PriceSort, _: i64, _: i64) -> Result<Vec<Product>> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn count(&self, _: &ProductFilter) -> Result<i64> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn count_limited(&self, _: &ProductFilter, _: i64) -> Result<i64> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn insert_many(&self, _: Vec<NewProduct>) -> Result<u64> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<()> {
        Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut))
    }
}
