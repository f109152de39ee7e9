//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` + `Validate` input DTOs where the entity is writable
//!
//! Entities serialize with camelCase keys to match the DeliverUS clients.

pub mod category;
pub mod product;
pub mod restaurant;
pub mod serde_helpers;
