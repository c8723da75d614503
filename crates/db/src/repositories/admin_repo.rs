//! Repository for the `admins` table.

use cardforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::admin::{AdminAccount, CreateAdmin, UpdateAdmin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, role, created_at, updated_at";

/// Provides CRUD operations for back-office accounts.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<AdminAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (username, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminAccount>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<AdminAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE username = $1");
        sqlx::query_as::<_, AdminAccount>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all accounts ordered by username.
    pub async fn list(pool: &PgPool) -> Result<Vec<AdminAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY username");
        sqlx::query_as::<_, AdminAccount>(&query).fetch_all(pool).await
    }

    /// Update username and/or role. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdmin,
    ) -> Result<Option<AdminAccount>, sqlx::Error> {
        let query = format!(
            "UPDATE admins SET
                username = COALESCE($2, username),
                role = COALESCE($3, role),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminAccount>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }
}
