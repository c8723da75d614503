//! Player directory lookups and the player's own views.

use cardforge_core::error::CoreError;
use cardforge_core::players::{display_timestamp, XP_CEILING};
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::types::DbId;
use cardforge_db::models::card::{Card, TeamSlot};
use cardforge_db::models::player::Player;
use cardforge_db::repositories::{CardRepo, PlayerRepo};
use cardforge_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;

/// A player row plus the derived display fields of the profile view.
#[derive(Debug, Serialize)]
pub struct PlayerProfile {
    pub id: DbId,
    pub discord_id: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub bloodcoins: i64,
    pub noblecoins: i64,
    pub level: i32,
    pub xp: i32,
    pub xp_ceiling: i32,
    pub achievements: serde_json::Value,
    pub gate_keys: i32,
    /// Formatted creation time, or `"Unknown"`.
    pub created: String,
    /// Formatted last-update time, or `"Unknown"`.
    pub updated: String,
}

impl From<Player> for PlayerProfile {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            discord_id: player.discord_id,
            username: player.username,
            avatar_url: player.avatar_url,
            bloodcoins: player.bloodcoins,
            noblecoins: player.noblecoins,
            level: player.level,
            xp: player.xp,
            xp_ceiling: XP_CEILING,
            achievements: player.achievements,
            gate_keys: player.gate_keys,
            created: display_timestamp(player.created_at),
            updated: display_timestamp(player.updated_at),
        }
    }
}

async fn lookup(pool: &DbPool, discord_id: &str) -> AppResult<Player> {
    let discord_id = discord_id.trim();
    let player = PlayerRepo::find_by_discord_id(pool, discord_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Player", discord_id))?;
    Ok(player)
}

/// Exact-match lookup by Discord id. An unknown id yields `NotFound`.
pub async fn find_player_by_discord_id(
    pool: &DbPool,
    principal: Option<&Principal>,
    discord_id: &str,
) -> AppResult<PlayerProfile> {
    authorize(principal, Role::Admin)?;
    Ok(lookup(pool, discord_id).await?.into())
}

/// The calling player's own profile.
pub async fn own_profile(pool: &DbPool, principal: Option<&Principal>) -> AppResult<PlayerProfile> {
    let principal = authorize(principal, Role::Player)?;
    Ok(lookup(pool, &principal.id).await?.into())
}

/// Cards owned by the calling player, ordered by name.
pub async fn own_inventory(pool: &DbPool, principal: Option<&Principal>) -> AppResult<Vec<Card>> {
    let principal = authorize(principal, Role::Player)?;
    let player = lookup(pool, &principal.id).await?;
    Ok(CardRepo::list_owned_by(pool, player.id).await?)
}

/// The calling player's team, ordered by slot.
pub async fn own_team(pool: &DbPool, principal: Option<&Principal>) -> AppResult<Vec<TeamSlot>> {
    let principal = authorize(principal, Role::Player)?;
    let player = lookup(pool, &principal.id).await?;
    Ok(PlayerRepo::team(pool, player.id).await?)
}
