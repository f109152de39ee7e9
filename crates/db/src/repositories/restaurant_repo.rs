//! Repository for the `restaurants` table.

use deliverus_core::restaurant::DEFAULT_STATUS;
use deliverus_core::types::{DbId, Timestamp};
use sqlx::{FromRow, PgPool};

use crate::models::category::RestaurantCategory;
use crate::models::restaurant::{
    CreateRestaurant, Restaurant, RestaurantWithCategory, UpdateRestaurant,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, description, address, postal_code, url, shipping_costs, \
    average_service_minutes, email, phone, logo, hero_image, status, \
    pinned_at, restaurant_category_id, user_id, created_at, updated_at";

/// Restaurant columns prefixed for joins, followed by the category columns.
const JOINED_COLUMNS: &str = "\
    r.id, r.name, r.description, r.address, r.postal_code, r.url, \
    r.shipping_costs, r.average_service_minutes, r.email, r.phone, r.logo, \
    r.hero_image, r.status, r.pinned_at, r.restaurant_category_id, r.user_id, \
    r.created_at, r.updated_at, \
    rc.name AS category_name, \
    rc.created_at AS category_created_at, \
    rc.updated_at AS category_updated_at";

/// FROM clause joining every restaurant to its category.
const JOINED_FROM: &str = "\
    restaurants r \
    JOIN restaurant_categories rc ON rc.id = r.restaurant_category_id";

/// A restaurant row joined with its category.
#[derive(FromRow)]
struct RestaurantCategoryRow {
    #[sqlx(flatten)]
    restaurant: Restaurant,
    category_name: String,
    category_created_at: Timestamp,
    category_updated_at: Timestamp,
}

impl From<RestaurantCategoryRow> for RestaurantWithCategory {
    fn from(row: RestaurantCategoryRow) -> Self {
        let restaurant_category = RestaurantCategory {
            id: row.restaurant.restaurant_category_id,
            name: row.category_name,
            created_at: row.category_created_at,
            updated_at: row.category_updated_at,
        };
        RestaurantWithCategory {
            restaurant: row.restaurant,
            restaurant_category,
        }
    }
}

/// Split a clearable field into whether it was sent and its new value.
fn clearable<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    (field.is_some(), field.as_ref().and_then(Option::as_ref))
}

/// Provides CRUD operations for restaurants.
pub struct RestaurantRepo;

impl RestaurantRepo {
    /// List every restaurant with its category, ordered by category name.
    pub async fn list_with_category(
        pool: &PgPool,
    ) -> Result<Vec<RestaurantWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM}
             ORDER BY rc.name ASC, r.id ASC"
        );
        let rows = sqlx::query_as::<_, RestaurantCategoryRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RestaurantWithCategory::from).collect())
    }

    /// List an owner's pinned restaurants, oldest pin first.
    pub async fn list_pinned_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RestaurantWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM}
             WHERE r.user_id = $1 AND r.pinned_at IS NOT NULL
             ORDER BY r.pinned_at ASC, r.id ASC"
        );
        let rows = sqlx::query_as::<_, RestaurantCategoryRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RestaurantWithCategory::from).collect())
    }

    /// List an owner's non-pinned restaurants, ordered by category name.
    pub async fn list_unpinned_by_owner(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RestaurantWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM {JOINED_FROM}
             WHERE r.user_id = $1 AND r.pinned_at IS NULL
             ORDER BY rc.name ASC, r.id ASC"
        );
        let rows = sqlx::query_as::<_, RestaurantCategoryRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(RestaurantWithCategory::from).collect())
    }

    /// Insert a new restaurant owned by `user_id`, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `offline`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateRestaurant,
        pinned_at: Option<Timestamp>,
    ) -> Result<Restaurant, sqlx::Error> {
        let query = format!(
            "INSERT INTO restaurants (
                name, description, address, postal_code, url, shipping_costs,
                average_service_minutes, email, phone, logo, hero_image, status,
                pinned_at, restaurant_category_id, user_id
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.address)
            .bind(&input.postal_code)
            .bind(&input.url)
            .bind(input.shipping_costs)
            .bind(input.average_service_minutes)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.logo)
            .bind(&input.hero_image)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_STATUS))
            .bind(pinned_at)
            .bind(input.restaurant_category_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a restaurant with its category by ID.
    pub async fn find_with_category(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RestaurantWithCategory>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} WHERE r.id = $1");
        let row = sqlx::query_as::<_, RestaurantCategoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(RestaurantWithCategory::from))
    }

    /// Look up only the owner of a restaurant. `None` if the row does not exist.
    pub async fn find_owner_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT user_id FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a restaurant.
    ///
    /// Required columns use `COALESCE` so only provided fields change. The
    /// nullable columns take a "provided" flag next to the value, so an
    /// explicit `null` in `input` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRestaurant,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let (description_provided, description) = clearable(&input.description);
        let (url_provided, url) = clearable(&input.url);
        let (minutes_provided, minutes) = clearable(&input.average_service_minutes);
        let (email_provided, email) = clearable(&input.email);
        let (phone_provided, phone) = clearable(&input.phone);
        let (logo_provided, logo) = clearable(&input.logo);
        let (hero_image_provided, hero_image) = clearable(&input.hero_image);

        let query = format!(
            "UPDATE restaurants SET
                name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                address = COALESCE($5, address),
                postal_code = COALESCE($6, postal_code),
                url = CASE WHEN $7 THEN $8 ELSE url END,
                shipping_costs = COALESCE($9, shipping_costs),
                average_service_minutes =
                    CASE WHEN $10 THEN $11 ELSE average_service_minutes END,
                email = CASE WHEN $12 THEN $13 ELSE email END,
                phone = CASE WHEN $14 THEN $15 ELSE phone END,
                logo = CASE WHEN $16 THEN $17 ELSE logo END,
                hero_image = CASE WHEN $18 THEN $19 ELSE hero_image END,
                status = COALESCE($20, status),
                restaurant_category_id = COALESCE($21, restaurant_category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(description_provided)
            .bind(description)
            .bind(&input.address)
            .bind(&input.postal_code)
            .bind(url_provided)
            .bind(url)
            .bind(input.shipping_costs)
            .bind(minutes_provided)
            .bind(minutes)
            .bind(email_provided)
            .bind(email)
            .bind(phone_provided)
            .bind(phone)
            .bind(logo_provided)
            .bind(logo)
            .bind(hero_image_provided)
            .bind(hero_image)
            .bind(&input.status)
            .bind(input.restaurant_category_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a restaurant (its products cascade).
    ///
    /// Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Flip the pin state in a single statement: clear `pinned_at` if set,
    /// otherwise stamp it with `now`.
    ///
    /// `now` comes from the caller so pins set here and pins set by
    /// [`create`](Self::create) share one clock.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn toggle_pinned(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<Restaurant>, sqlx::Error> {
        let query = format!(
            "UPDATE restaurants SET
                pinned_at = CASE WHEN pinned_at IS NULL THEN $2 ELSE NULL END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Restaurant>(&query)
            .bind(id)
            .bind(now)
            .fetch_optional(pool)
            .await
    }
}
