pub mod error;
pub mod restaurant;
pub mod roles;
pub mod types;
