//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `deliverus_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod restaurant;
pub mod restaurant_category;
