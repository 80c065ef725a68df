use serde::{Deserialize, Serialize};

use super::Product;

// Request types

/// Raw query string of the backend listing. Everything stays a string so a
/// malformed `page` falls back to the first page instead of rejecting the
/// request.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub s: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

impl ListingQuery {
    /// Folds decoded query pairs, keeping the first value of a repeated key.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "s" => &mut query.s,
                "sort" => &mut query.sort,
                "page" => &mut query.page,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

// Response types

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEnvelope {
    pub total_items: i64,
    pub item_count: i64,
    pub current_page: i64,
    pub total_page: i64,
    pub data: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct PopulateResponse {
    pub message: &'static str,
}
