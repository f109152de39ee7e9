//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token validation.
//!
//! Accounts and login live in the external authentication service; this
//! crate only verifies the tokens it issues.

pub mod jwt;
