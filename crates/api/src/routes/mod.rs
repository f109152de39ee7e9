pub mod health;
pub mod restaurant;
pub mod restaurant_category;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /restaurants                          list (public), create (owner)
/// /restaurants/{id}                     show (public), update, delete (owner of id)
/// /restaurants/{id}/toggle-pinned       toggle pin (owner of id)
///
/// /users/my-restaurants                 caller's restaurants, pinned first (owner)
///
/// /restaurant-categories                list (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/restaurants", restaurant::router())
        .nest("/users", restaurant::owner_router())
        .nest("/restaurant-categories", restaurant_category::router())
}
