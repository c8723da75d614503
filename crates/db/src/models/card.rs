//! Catalog card model and DTOs.

use cardforge_core::cards::CardForm;
use cardforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cards` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Card {
    pub id: DbId,
    pub character_name: String,
    pub form: String,
    pub image_url: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<DbId>,
    pub approved: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a card. Validated upstream.
#[derive(Debug, Clone)]
pub struct CreateCard {
    pub character_name: String,
    pub form: CardForm,
    pub image_url: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub approved: bool,
}

/// DTO for editing a card. Only supplied fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCard {
    pub character_name: Option<String>,
    pub form: Option<String>,
    pub image_url: Option<String>,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub description: Option<String>,
}

/// Resolved catalog listing parameters.
#[derive(Debug, Clone, Default)]
pub struct CardListParams {
    pub form: Option<CardForm>,
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Card count for a single form, used by the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FormCount {
    pub form: String,
    pub count: i64,
}

/// A card in a player's team, joined from `player_team`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamSlot {
    pub slot: i32,
    pub is_captain: bool,
    pub card_id: DbId,
    pub character_name: String,
    pub form: String,
    pub series: Option<String>,
    pub image_url: String,
}
