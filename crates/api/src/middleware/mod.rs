//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireOwner`] -- Requires the `owner` role.
//! - [`ownership::RestaurantOwner`] -- Requires the caller to own the restaurant in the path.

pub mod auth;
pub mod ownership;
pub mod rbac;
