//! Route definitions for the `/restaurants` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::restaurant;
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// ```text
/// GET    /                      -> index
/// POST   /                      -> create           (owner)
/// GET    /{id}                  -> show
/// PUT    /{id}                  -> update           (owner of {id})
/// PATCH  /{id}                  -> update           (owner of {id})
/// DELETE /{id}                  -> destroy          (owner of {id})
/// PATCH  /{id}/toggle-pinned    -> toggle_pinned    (owner of {id})
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::index).post(restaurant::create))
        .route(
            "/{id}",
            get(restaurant::show)
                .put(restaurant::update)
                .patch(restaurant::update)
                .delete(restaurant::destroy),
        )
        .route("/{id}/toggle-pinned", patch(restaurant::toggle_pinned))
}

/// Owner-scoped restaurant routes mounted at `/users`.
///
/// ```text
/// GET    /my-restaurants        -> index_owner      (owner)
/// ```
pub fn owner_router() -> Router<AppState> {
    Router::new().route("/my-restaurants", get(restaurant::index_owner))
}
