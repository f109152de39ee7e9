//! Route definitions for the `/restaurant-categories` lookup resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::restaurant_category;
use crate::state::AppState;

/// Routes mounted at `/restaurant-categories`.
///
/// ```text
/// GET    /                      -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(restaurant_category::list))
}
