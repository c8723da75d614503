//! Back-office account model and DTOs.

use cardforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminAccount {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: DbId,
    pub username: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<AdminAccount> for AdminResponse {
    fn from(account: AdminAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            role: account.role,
            created_at: account.created_at,
        }
    }
}

/// DTO for creating a new account. The password is already hashed.
#[derive(Debug)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// DTO for the management screen. Only username and role are editable.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAdmin {
    pub username: Option<String>,
    pub role: Option<String>,
}
