mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{NewProduct, Product},
    planner::{PriceSort, ProductFilter},
};

/// Find/count primitives the listing runs against. Implementations must be
/// safe to share across concurrent requests.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Product>>;

    async fn count(&self, filter: &ProductFilter) -> Result<i64>;

    /// Number of matches, capped at `limit`.
    async fn count_limited(&self, filter: &ProductFilter, limit: i64) -> Result<i64>;

    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Appends the records and returns how many were written.
    async fn insert_many(&self, products: Vec<NewProduct>) -> Result<u64>;

    async fn ping(&self) -> Result<()>;
}
