//! Repository for the `revoked_tokens` table.

use sqlx::PgPool;

/// Tracks session tokens ended by logout.
pub struct RevokedTokenRepo;

impl RevokedTokenRepo {
    /// Mark a token id as revoked. Revoking twice is a no-op.
    pub async fn revoke(pool: &PgPool, jti: &str) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO revoked_tokens (jti) VALUES ($1) ON CONFLICT (jti) DO NOTHING")
            .bind(jti)
            .execute(pool)
            .await?;
        Ok(())
    }

    pub async fn is_revoked(pool: &PgPool, jti: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM revoked_tokens WHERE jti = $1)")
                .bind(jti)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
