//! Repository for the `products` table.

use deliverus_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::category::ProductCategory;
use crate::models::product::{Product, ProductWithCategory};

/// Product columns prefixed for joins, followed by the category columns.
const JOINED_COLUMNS: &str = "\
    p.id, p.name, p.description, p.price, p.image, p.sort_order, \
    p.availability, p.restaurant_id, p.product_category_id, \
    p.created_at, p.updated_at, \
    pc.name AS category_name, \
    pc.created_at AS category_created_at, \
    pc.updated_at AS category_updated_at";

/// A product row joined with its category.
#[derive(FromRow)]
struct ProductCategoryRow {
    #[sqlx(flatten)]
    product: Product,
    category_name: String,
    category_created_at: Timestamp,
    category_updated_at: Timestamp,
}

impl From<ProductCategoryRow> for ProductWithCategory {
    fn from(row: ProductCategoryRow) -> Self {
        let product_category = ProductCategory {
            id: row.product.product_category_id,
            name: row.category_name,
            created_at: row.category_created_at,
            updated_at: row.category_updated_at,
        };
        ProductWithCategory {
            product: row.product,
            product_category,
        }
    }
}

/// Read access to products.
pub struct ProductRepo;

impl ProductRepo {
    /// List a restaurant's products with their categories, ordered by
    /// display position (ties broken by id).
    pub async fn list_by_restaurant_with_category(
        pool: &PgPool,
        restaurant_id: DbId,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM products p
             JOIN product_categories pc ON pc.id = p.product_category_id
             WHERE p.restaurant_id = $1
             ORDER BY p.sort_order ASC, p.id ASC"
        );
        let rows = sqlx::query_as::<_, ProductCategoryRow>(&query)
            .bind(restaurant_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProductWithCategory::from).collect())
    }
}
