//! Player directory model.

use cardforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `players` table. Rows are provisioned by the bot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bloodcoins: i64,
    pub noblecoins: i64,
    pub level: i32,
    pub xp: i32,
    pub achievements: serde_json::Value,
    pub gate_keys: i32,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// DTO for provisioning a player. Used by fixtures and tooling; the web
/// workflow never creates players.
#[derive(Debug, Clone)]
pub struct CreatePlayer {
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}
