pub const PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub skip: i64,
    pub page_size: i64,
}

/// Anything that is not a positive integer lands on page 1. There is no
/// upper bound; pages past the end just come back empty.
pub fn compute_pagination(page: Option<&str>) -> Pagination {
    let page = page
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1);

    Pagination {
        page,
        skip: (page - 1).saturating_mul(PAGE_SIZE),
        page_size: PAGE_SIZE,
    }
}
