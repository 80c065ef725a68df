use crate::models::{ListingEnvelope, Product};

use super::PAGE_SIZE;

/// How `item_count` and `total_page` are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMath {
    /// `item_count` is the capped count (min(total, page size)) and
    /// `total_page` truncates. Matches the listing's historical output.
    #[default]
    Compatible,
    /// `item_count` is the number of records on this page and `total_page`
    /// rounds up.
    Corrected,
}

pub fn assemble_envelope(
    math: PageMath,
    total_count: i64,
    page_count: i64,
    page: i64,
    data: Vec<Product>,
) -> ListingEnvelope {
    let (item_count, total_page) = match math {
        PageMath::Compatible => (page_count, total_count / PAGE_SIZE),
        PageMath::Corrected => (
            data.len() as i64,
            (total_count + PAGE_SIZE - 1) / PAGE_SIZE,
        ),
    };

    ListingEnvelope {
        total_items: total_count,
        item_count,
        current_page: page,
        total_page,
        data,
    }
}
