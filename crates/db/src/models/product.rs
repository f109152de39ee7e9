//! Product entity model.

use deliverus_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::category::ProductCategory;

/// A product row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    /// Display position within the restaurant's menu.
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub availability: bool,
    pub restaurant_id: DbId,
    pub product_category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product together with its category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub product_category: ProductCategory,
}
