//! Caller roles.
//!
//! Role names are issued by the authentication service inside the JWT
//! `role` claim. Only the two DeliverUS roles are recognised; any other
//! name is rejected when the token is read.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_CUSTOMER: &str = "customer";

/// The role a caller acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Restaurant owner; may manage their own restaurants.
    Owner,
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => ROLE_OWNER,
            Role::Customer => ROLE_CUSTOMER,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_OWNER => Ok(Role::Owner),
            ROLE_CUSTOMER => Ok(Role::Customer),
            other => Err(CoreError::Unauthorized(format!("Unknown role '{other}'"))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn known_roles_parse_and_print_back() {
        for role in [Role::Owner, Role::Customer] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_or_differently_cased_roles_are_rejected() {
        assert_matches!("admin".parse::<Role>(), Err(CoreError::Unauthorized(_)));
        assert_matches!("Owner".parse::<Role>(), Err(CoreError::Unauthorized(_)));
        assert_matches!("".parse::<Role>(), Err(CoreError::Unauthorized(_)));
    }
}
