use fake::{
    Fake,
    faker::lorem::en::{Paragraph, Word},
};
use rand::Rng;
use uuid::Uuid;

use crate::{error::Result, models::NewProduct, store::ProductStore};

const MIN_PRICE: i32 = 10;
const MAX_PRICE: i32 = 99;

pub fn synthetic_product() -> NewProduct {
    let title: String = Word().fake();
    let description: String = Paragraph(3..6).fake();
    let price = rand::thread_rng().gen_range(MIN_PRICE..=MAX_PRICE);

    NewProduct {
        title: Some(title),
        description: Some(description),
        image: Some(format!(
            "http://lorempixel.com/200/200?{}",
            Uuid::new_v4().simple()
        )),
        price: Some(price),
    }
}

/// Appends `count` synthetic products. Never deduplicates.
pub async fn populate(store: &dyn ProductStore, count: usize) -> Result<u64> {
    let products: Vec<NewProduct> = (0..count).map(|_| synthetic_product()).collect();
    let written = store.insert_many(products).await?;

    tracing::info!("Seeded {} synthetic products", written);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{planner::ProductFilter, store::MemoryProductStore};

    #[test]
    fn synthetic_products_are_complete() {
        for _ in 0..100 {
            let product = synthetic_product();
            let price = product.price.unwrap();
            assert!((MIN_PRICE..=MAX_PRICE).contains(&price));
            assert!(!product.title.unwrap().is_empty());
            assert!(!product.description.unwrap().is_empty());
            assert!(
                product
                    .image
                    .unwrap()
                    .starts_with("http://lorempixel.com/200/200?")
            );
        }
    }

    #[tokio::test]
    async fn populate_appends() {
        let store = MemoryProductStore::new();
        assert_eq!(populate(&store, 50).await.unwrap(), 50);
        assert_eq!(populate(&store, 50).await.unwrap(), 50);
        assert_eq!(store.count(&ProductFilter::All).await.unwrap(), 100);
    }
}
