//! Handlers for the `/restaurant-categories` lookup resource.

use axum::extract::State;
use axum::Json;
use deliverus_db::models::category::RestaurantCategory;
use deliverus_db::repositories::RestaurantCategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/restaurant-categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RestaurantCategory>>> {
    let categories = RestaurantCategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}
