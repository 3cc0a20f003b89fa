use serde::{Deserialize, Serialize};

/// A catalog product as stored.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub title: Option<String>,
    /// ASP name exactly as the crawler reported it.
    pub asp_name: String,
    pub source_url: Option<String>,
    /// Canonical slug, `NULL` until derived.
    pub asp_slug: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for inserting or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_code: String,
    #[serde(default)]
    pub title: Option<String>,
    pub asp_name: String,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Number of products attributed to one canonical ASP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AspCount {
    pub asp_slug: String,
    pub count: i64,
}

/// Result of an upsert: the row id and the slug it was tagged with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertedProduct {
    pub id: i64,
    pub asp_slug: String,
}
