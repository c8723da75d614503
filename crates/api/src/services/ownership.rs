//! Ownership ledger: which player holds a catalog card.

use cardforge_core::error::CoreError;
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::types::DbId;
use cardforge_db::models::card::Card;
use cardforge_db::repositories::{CardRepo, PlayerRepo};
use cardforge_db::DbPool;

use crate::error::AppResult;

/// Give a card to the player with `discord_id`.
///
/// Overwrites any current owner: the last assignment wins.
pub async fn assign(
    pool: &DbPool,
    principal: Option<&Principal>,
    card_id: DbId,
    discord_id: &str,
) -> AppResult<Card> {
    let principal = authorize(principal, Role::Admin)?;
    let discord_id = discord_id.trim();
    if discord_id.is_empty() {
        return Err(CoreError::validation("discord_id", "must not be blank").into());
    }

    let player = PlayerRepo::find_by_discord_id(pool, discord_id)
        .await?
        .ok_or_else(|| CoreError::not_found("Player", discord_id))?;

    let card = CardRepo::set_owner(pool, card_id, Some(player.id))
        .await?
        .ok_or_else(|| CoreError::not_found("Card", card_id))?;

    tracing::info!(
        card_id,
        player_id = player.id,
        discord_id,
        admin = %principal.username,
        "Card assigned",
    );
    Ok(card)
}

/// Return a card to the unowned pool.
pub async fn unassign(pool: &DbPool, principal: Option<&Principal>, card_id: DbId) -> AppResult<Card> {
    let principal = authorize(principal, Role::Admin)?;

    let card = CardRepo::set_owner(pool, card_id, None)
        .await?
        .ok_or_else(|| CoreError::not_found("Card", card_id))?;

    tracing::info!(card_id, admin = %principal.username, "Card unassigned");
    Ok(card)
}
