use std::cmp::Ordering;

use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceSort {
    Ascending,
    Descending,
    /// Store's natural order, which is insertion order.
    #[default]
    Unspecified,
}

pub fn build_sort(token: Option<&str>) -> PriceSort {
    match token {
        Some("asc") => PriceSort::Ascending,
        Some("desc") => PriceSort::Descending,
        _ => PriceSort::Unspecified,
    }
}

impl PriceSort {
    /// Ordering used by the in-memory store. Products without a price go last
    /// and ties fall back to id, mirroring the SQL `ORDER BY`.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let by_price = match (self, a.price, b.price) {
            (PriceSort::Unspecified, _, _) => Ordering::Equal,
            (_, None, None) => Ordering::Equal,
            (_, None, Some(_)) => Ordering::Greater,
            (_, Some(_), None) => Ordering::Less,
            (PriceSort::Ascending, Some(x), Some(y)) => x.cmp(&y),
            (PriceSort::Descending, Some(x), Some(y)) => y.cmp(&x),
        };
        by_price.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    fn priced(id: i64, price: Option<i32>) -> Product {
        NewProduct {
            price,
            ..Default::default()
        }
        .with_id(id)
    }

    #[test]
    fn known_tokens() {
        assert_eq!(build_sort(Some("asc")), PriceSort::Ascending);
        assert_eq!(build_sort(Some("desc")), PriceSort::Descending);
    }

    #[test]
    fn anything_else_is_unspecified() {
        for token in [None, Some(""), Some("ASC"), Some("price"), Some("random")] {
            assert_eq!(build_sort(token), PriceSort::Unspecified);
        }
    }

    #[test]
    fn descending_puts_missing_prices_last() {
        let mut products = vec![priced(1, Some(10)), priced(2, None), priced(3, Some(50))];
        products.sort_by(|a, b| PriceSort::Descending.compare(a, b));
        let ids: Vec<_> = products.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn unspecified_keeps_insertion_order() {
        let mut products = vec![priced(3, Some(1)), priced(1, Some(9)), priced(2, Some(5))];
        products.sort_by(|a, b| PriceSort::Unspecified.compare(a, b));
        let ids: Vec<_> = products.iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
