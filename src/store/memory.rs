use async_trait::async_trait;
use parking_lot::RwLock;

use super::ProductStore;
use crate::{
    error::Result,
    models::{NewProduct, Product},
    planner::{PriceSort, ProductFilter},
};

/// Process-local store. Ids come from a counter, so id order is insertion
/// order, same as the `BIGSERIAL` column in postgres.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    products: Vec<Product>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<NewProduct>) -> Self {
        let store = Self::new();
        store.append(products);
        store
    }

    fn append(&self, products: Vec<NewProduct>) -> u64 {
        let mut inner = self.inner.write();
        let mut written = 0;
        for product in products {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.products.push(product.with_id(id));
            written += 1;
        }
        written
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: PriceSort,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Product>> {
        let inner = self.inner.read();
        let mut matched: Vec<Product> = inner
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matched.sort_by(|a, b| sort.compare(a, b));

        Ok(matched
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<i64> {
        let inner = self.inner.read();
        Ok(inner.products.iter().filter(|p| filter.matches(p)).count() as i64)
    }

    async fn count_limited(&self, filter: &ProductFilter, limit: i64) -> Result<i64> {
        let inner = self.inner.read();
        let capped = inner
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .take(usize::try_from(limit).unwrap_or(0))
            .count();
        Ok(capped as i64)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.inner.read().products.clone())
    }

    async fn insert_many(&self, products: Vec<NewProduct>) -> Result<u64> {
        Ok(self.append(products))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
