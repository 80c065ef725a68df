use serde::{Deserialize, Serialize};

/// A catalog entry. Every field but `id` may be missing on a stored record,
/// and missing fields are left out of the JSON instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price: Option<i32>,
}

impl NewProduct {
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id: Some(id),
            title: self.title,
            description: self.description,
            image: self.image,
            price: self.price,
        }
    }
}
