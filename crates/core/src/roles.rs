//! Roles, the typed session principal, and the authorization gate.
//!
//! The role names must match the CHECK constraint on `admins.role` in
//! `20260101000001_create_admins.sql` (`player` is never stored there; it
//! is only granted through Discord login).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CARD_MAKER: &str = "card_maker";
pub const ROLE_PLAYER: &str = "player";

/// Roles that may be stored on an `admins` row.
pub const ACCOUNT_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_CARD_MAKER];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    CardMaker,
    Player,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::CardMaker => ROLE_CARD_MAKER,
            Role::Player => ROLE_PLAYER,
        }
    }

    /// Parse a role that is allowed on a stored account.
    pub fn parse_account_role(value: &str) -> Result<Role, CoreError> {
        match value.parse::<Role>() {
            Ok(role) if role != Role::Player => Ok(role),
            _ => Err(CoreError::validation(
                "role",
                format!("must be one of: {}", ACCOUNT_ROLES.join(", ")),
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_CARD_MAKER => Ok(Role::CardMaker),
            ROLE_PLAYER => Ok(Role::Player),
            other => Err(CoreError::validation(
                "role",
                format!("unknown role '{other}'"),
            )),
        }
    }
}

/// The authenticated caller behind a request.
///
/// `id` is opaque: the decimal `admins.id` for password logins, the Discord
/// snowflake for Discord logins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl Principal {
    pub fn new(id: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
        }
    }
}

/// The single authorization gate.
///
/// Passes only when the principal holds exactly `required`. Every failure,
/// including an anonymous caller, yields the same `Unauthorized` error.
pub fn authorize(principal: Option<&Principal>, required: Role) -> Result<&Principal, CoreError> {
    match principal {
        Some(p) if p.role == required => Ok(p),
        _ => Err(CoreError::login_required()),
    }
}
