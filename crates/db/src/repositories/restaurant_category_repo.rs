//! Repository for the `restaurant_categories` lookup table.

use sqlx::PgPool;

use crate::models::category::RestaurantCategory;

/// Read access to restaurant categories.
pub struct RestaurantCategoryRepo;

impl RestaurantCategoryRepo {
    /// List all restaurant categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<RestaurantCategory>, sqlx::Error> {
        sqlx::query_as::<_, RestaurantCategory>(
            "SELECT id, name, created_at, updated_at
             FROM restaurant_categories
             ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
