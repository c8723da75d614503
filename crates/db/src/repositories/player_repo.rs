//! Repository for the `players` and `player_team` tables.

use cardforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::TeamSlot;
use crate::models::player::{CreatePlayer, Player};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, discord_id, username, avatar_url, bloodcoins, noblecoins, \
                        level, xp, achievements, gate_keys, created_at, updated_at";

/// Read access to the player directory.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Provision a player row. The bot owns this in production.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (discord_id, username, avatar_url, created_at, updated_at)
             VALUES ($1, $2, $3, NOW(), NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.discord_id)
            .bind(&input.username)
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    /// Exact-match lookup by Discord id.
    pub async fn find_by_discord_id(
        pool: &PgPool,
        discord_id: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE discord_id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(discord_id)
            .fetch_optional(pool)
            .await
    }

    /// A player's team, ordered by slot.
    pub async fn team(pool: &PgPool, player_id: DbId) -> Result<Vec<TeamSlot>, sqlx::Error> {
        sqlx::query_as::<_, TeamSlot>(
            "SELECT pt.slot, pt.is_captain, c.id AS card_id, c.character_name, c.form, \
                    c.series, c.image_url \
             FROM player_team pt \
             JOIN cards c ON c.id = pt.card_id \
             WHERE pt.player_id = $1 \
             ORDER BY pt.slot",
        )
        .bind(player_id)
        .fetch_all(pool)
        .await
    }

    /// Put a card into a team slot, replacing whatever was there.
    pub async fn set_team_slot(
        pool: &PgPool,
        player_id: DbId,
        slot: i32,
        card_id: DbId,
        is_captain: bool,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO player_team (player_id, slot, card_id, is_captain)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (player_id, slot)
             DO UPDATE SET card_id = EXCLUDED.card_id, is_captain = EXCLUDED.is_captain",
        )
        .bind(player_id)
        .bind(slot)
        .bind(card_id)
        .bind(is_captain)
        .execute(pool)
        .await?;
        Ok(())
    }
}
