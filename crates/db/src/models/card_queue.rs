//! Append-only catalog change log.

use cardforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `card_queue` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CardQueueEntry {
    pub id: DbId,
    pub card_id: DbId,
    pub action: String,
    pub status: String,
    pub created_at: Timestamp,
}
