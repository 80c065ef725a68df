//! Turns the backend listing's query string into a filter, a sort and a page
//! window, runs it against a [`ProductStore`] and wraps the result in a
//! [`ListingEnvelope`].

mod envelope;
mod filter;
mod pagination;
mod sort;

pub use envelope::{PageMath, assemble_envelope};
pub use filter::{ProductFilter, build_filter, like_pattern};
pub use pagination::{PAGE_SIZE, Pagination, compute_pagination};
pub use sort::{PriceSort, build_sort};

use crate::{
    error::Result,
    models::{ListingEnvelope, ListingQuery},
    store::ProductStore,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub filter: ProductFilter,
    pub sort: PriceSort,
    pub pagination: Pagination,
}

impl QueryPlan {
    pub fn from_query(query: &ListingQuery) -> Self {
        Self {
            filter: build_filter(query.s.as_deref()),
            sort: build_sort(query.sort.as_deref()),
            pagination: compute_pagination(query.page.as_deref()),
        }
    }
}

pub async fn list_products(
    store: &dyn ProductStore,
    math: PageMath,
    query: &ListingQuery,
) -> Result<ListingEnvelope> {
    let plan = QueryPlan::from_query(query);
    tracing::debug!(?plan, ?math, "Listing products");

    let Pagination {
        page,
        skip,
        page_size,
    } = plan.pagination;

    let total = store.count(&plan.filter).await?;
    let capped = match math {
        PageMath::Compatible => store.count_limited(&plan.filter, page_size).await?,
        PageMath::Corrected => 0,
    };
    let data = store.find(&plan.filter, plan.sort, skip, page_size).await?;

    Ok(assemble_envelope(math, total, capped, page, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_from_full_query() {
        let query = ListingQuery {
            s: Some("lamp".to_string()),
            sort: Some("desc".to_string()),
            page: Some("3".to_string()),
        };

        let plan = QueryPlan::from_query(&query);
        assert_eq!(
            plan.filter,
            ProductFilter::TitleOrDescriptionContains("lamp".to_string())
        );
        assert_eq!(plan.sort, PriceSort::Descending);
        assert_eq!(plan.pagination.page, 3);
        assert_eq!(plan.pagination.skip, 20);
        assert_eq!(plan.pagination.page_size, PAGE_SIZE);
    }

    #[test]
    fn plan_from_empty_query() {
        let plan = QueryPlan::from_query(&ListingQuery::default());
        assert_eq!(plan.filter, ProductFilter::All);
        assert_eq!(plan.sort, PriceSort::Unspecified);
        assert_eq!(plan.pagination.page, 1);
        assert_eq!(plan.pagination.skip, 0);
    }
}
