//! Repository for the append-only `card_queue` change log.

use cardforge_core::submissions::QUEUE_STATUS_PENDING;
use cardforge_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::card_queue::CardQueueEntry;

const COLUMNS: &str = "id, card_id, action, status, created_at";

pub struct CardQueueRepo;

impl CardQueueRepo {
    /// Append a change-log entry.
    ///
    /// Generic over the executor so it can run inside a caller's transaction.
    pub async fn append<'e, E>(
        executor: E,
        card_id: DbId,
        action: &str,
    ) -> Result<CardQueueEntry, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO card_queue (card_id, action, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CardQueueEntry>(&query)
            .bind(card_id)
            .bind(action)
            .bind(QUEUE_STATUS_PENDING)
            .fetch_one(executor)
            .await
    }

    /// All entries for a card, oldest first.
    pub async fn list_for_card(
        pool: &PgPool,
        card_id: DbId,
    ) -> Result<Vec<CardQueueEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM card_queue WHERE card_id = $1 ORDER BY id");
        sqlx::query_as::<_, CardQueueEntry>(&query)
            .bind(card_id)
            .fetch_all(pool)
            .await
    }
}
