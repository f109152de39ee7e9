//! Handlers for the `/restaurants` resource.
//!
//! Public listing and detail, owner-scoped listing with pinned restaurants
//! first, and the owner-only create/update/delete/pin operations.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use deliverus_core::error::CoreError;
use deliverus_core::restaurant::{deletion_message, initial_pinned_at, pinned_first};
use deliverus_core::types::DbId;
use deliverus_db::models::restaurant::{
    CreateRestaurant, Restaurant, RestaurantDetail, RestaurantWithCategory, UpdateRestaurant,
};
use deliverus_db::repositories::{ProductRepo, RestaurantRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::ownership::RestaurantOwner;
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

/// GET /api/v1/restaurants
///
/// Every restaurant with its category, ordered by category name.
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<RestaurantWithCategory>>> {
    let restaurants = RestaurantRepo::list_with_category(&state.pool).await?;
    Ok(Json(restaurants))
}

/// GET /api/v1/users/my-restaurants
///
/// The caller's restaurants: pinned ones first (oldest pin first), then the
/// rest ordered by category name.
pub async fn index_owner(
    RequireOwner(owner): RequireOwner,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<RestaurantWithCategory>>> {
    let pinned = RestaurantRepo::list_pinned_by_owner(&state.pool, owner.user_id).await?;
    let unpinned = RestaurantRepo::list_unpinned_by_owner(&state.pool, owner.user_id).await?;
    Ok(Json(pinned_first(pinned, unpinned)))
}

/// POST /api/v1/restaurants
pub async fn create(
    RequireOwner(owner): RequireOwner,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateRestaurant>,
) -> AppResult<Json<Restaurant>> {
    let pinned_at = initial_pinned_at(input.pinned, Utc::now());
    let restaurant = RestaurantRepo::create(&state.pool, owner.user_id, &input, pinned_at).await?;

    tracing::info!(
        restaurant_id = restaurant.id,
        user_id = owner.user_id,
        pinned = restaurant.pinned_at.is_some(),
        "Restaurant created",
    );

    Ok(Json(restaurant))
}

/// GET /api/v1/restaurants/{id}
///
/// Responds with `null` when the restaurant does not exist.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Option<RestaurantDetail>>> {
    let Some(found) = RestaurantRepo::find_with_category(&state.pool, id).await? else {
        return Ok(Json(None));
    };
    let products = ProductRepo::list_by_restaurant_with_category(&state.pool, id).await?;

    Ok(Json(Some(RestaurantDetail {
        restaurant: found.restaurant,
        restaurant_category: found.restaurant_category,
        products,
    })))
}

/// PUT|PATCH /api/v1/restaurants/{id}
pub async fn update(
    RestaurantOwner(owner): RestaurantOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateRestaurant>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = RestaurantRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id,
        }))?;

    tracing::info!(restaurant_id = id, user_id = owner.user_id, "Restaurant updated");

    Ok(Json(restaurant))
}

/// DELETE /api/v1/restaurants/{id}
///
/// Always answers 200 with a message; a missing row is reported in the text.
pub async fn destroy(
    RestaurantOwner(owner): RestaurantOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<String>> {
    let deleted = RestaurantRepo::delete(&state.pool, id).await?;

    tracing::info!(
        restaurant_id = id,
        user_id = owner.user_id,
        deleted,
        "Restaurant delete requested",
    );

    Ok(Json(deletion_message(id, deleted)))
}

/// PATCH /api/v1/restaurants/{id}/toggle-pinned
pub async fn toggle_pinned(
    RestaurantOwner(owner): RestaurantOwner,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Restaurant>> {
    let restaurant = RestaurantRepo::toggle_pinned(&state.pool, id, Utc::now())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Restaurant",
            id,
        }))?;

    tracing::info!(
        restaurant_id = id,
        user_id = owner.user_id,
        pinned = restaurant.pinned_at.is_some(),
        "Restaurant pin toggled",
    );

    Ok(Json(restaurant))
}
