//! Restaurant domain rules.
//!
//! Status values, field validators used by the restaurant input DTOs, and
//! the small pieces of pin and deletion logic the restaurant handlers share.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::types::{DbId, Timestamp};

/* --------------------------------------------------------------------------
   Status constants
   -------------------------------------------------------------------------- */

pub const STATUS_ONLINE: &str = "online";
pub const STATUS_OFFLINE: &str = "offline";
pub const STATUS_CLOSED: &str = "closed";
pub const STATUS_TEMPORARILY_CLOSED: &str = "temporarily closed";

/// All valid restaurant status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ONLINE,
    STATUS_OFFLINE,
    STATUS_CLOSED,
    STATUS_TEMPORARILY_CLOSED,
];

/// Status assigned when a create request omits one.
pub const DEFAULT_STATUS: &str = STATUS_OFFLINE;

/* --------------------------------------------------------------------------
   Messages
   -------------------------------------------------------------------------- */

/// Prefix of the message returned when a restaurant row was removed.
pub const DELETED_MESSAGE_PREFIX: &str = "Sucessfuly deleted restaurant id.";

/// Message returned when no restaurant row was removed.
pub const NOT_DELETED_MESSAGE: &str = "Could not delete restaurant.";

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{0,19}$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()\-]{3,30}$").expect("valid regex"));

/* --------------------------------------------------------------------------
   Field validators
   -------------------------------------------------------------------------- */

/// Validate that `status` is one of [`VALID_STATUSES`].
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(ValidationError::new("status").with_message(Cow::Owned(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))))
    }
}

/// Validate a postal code: letters, digits, spaces and hyphens, at most 20 chars.
pub fn validate_postal_code(postal_code: &str) -> Result<(), ValidationError> {
    if POSTAL_CODE_RE.is_match(postal_code) {
        Ok(())
    } else {
        Err(ValidationError::new("postal_code")
            .with_message(Cow::Borrowed("Postal code contains invalid characters")))
    }
}

/// Validate a phone number: digits with optional leading `+`, spaces,
/// hyphens and parentheses.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("Phone number is not valid")))
    }
}

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("Must not be blank")))
    } else {
        Ok(())
    }
}

/* --------------------------------------------------------------------------
   Pin and deletion helpers
   -------------------------------------------------------------------------- */

/// Pin timestamp for a newly created restaurant.
pub fn initial_pinned_at(pinned: Option<bool>, now: Timestamp) -> Option<Timestamp> {
    pinned.unwrap_or(false).then_some(now)
}

/// Concatenate an owner's pinned restaurants ahead of the non-pinned ones.
///
/// Each input keeps its own order; callers pass them already sorted.
pub fn pinned_first<T>(pinned: Vec<T>, unpinned: Vec<T>) -> Vec<T> {
    let mut combined = pinned;
    combined.extend(unpinned);
    combined
}

/// Build the destroy response message from the number of deleted rows.
///
/// Only exactly one removed row counts as success.
pub fn deletion_message(id: DbId, rows_affected: u64) -> String {
    if rows_affected == 1 {
        format!("{DELETED_MESSAGE_PREFIX}{id}")
    } else {
        NOT_DELETED_MESSAGE.to_string()
    }
}
