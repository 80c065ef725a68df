use std::{future::Future, time::Duration};

use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductStore;
use crate::{
    database,
    error::{AppError, Result},
    models::{NewProduct, Product},
    planner::{PriceSort, ProductFilter},
    queries::products_queries,
};

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgProductStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn bounded<T>(&self, fut: impl Future<Output = Result<T>> + Send) -> Result<T> {
        tokio::time::timeout(self.query_timeout, fut)
            .await
            .map_err(|_| AppError::StoreTimeout(self.query_timeout))?
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Product>> {
        self.bounded(products_queries::find(&self.pool, filter, sort, skip, limit))
            .await
    }

    async fn count(&self, filter: &ProductFilter) -> Result<i64> {
        self.bounded(products_queries::count(&self.pool, filter))
            .await
    }

    async fn count_limited(&self, filter: &ProductFilter, limit: i64) -> Result<i64> {
        self.bounded(products_queries::count_limited(&self.pool, filter, limit))
            .await
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        self.bounded(products_queries::find_all(&self.pool)).await
    }

    async fn insert_many(&self, products: Vec<NewProduct>) -> Result<u64> {
        self.bounded(products_queries::insert_many(&self.pool, products))
            .await
    }

    async fn ping(&self) -> Result<()> {
        self.bounded(database::check_health(&self.pool)).await
    }
}
