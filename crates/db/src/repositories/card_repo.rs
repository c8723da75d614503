//! Repository for the `cards` table (catalog and ownership ledger).

use cardforge_core::cards::like_pattern;
use cardforge_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::card::{Card, CardListParams, CreateCard, FormCount, UpdateCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_name, form, image_url, series, event_name, \
                        description, owner_id, approved, created_at";

/// Provides catalog CRUD and ownership updates for cards.
pub struct CardRepo;

impl CardRepo {
    /// Insert a new unowned card, returning the created row.
    ///
    /// Generic over the executor so the approval promotion can insert inside
    /// its transaction.
    pub async fn create<'e, E>(executor: E, input: &CreateCard) -> Result<Card, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO cards
                (character_name, form, image_url, series, event_name, description, approved)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(&input.character_name)
            .bind(input.form.as_str())
            .bind(&input.image_url)
            .bind(&input.series)
            .bind(&input.event_name)
            .bind(&input.description)
            .bind(input.approved)
            .fetch_one(executor)
            .await
    }

    /// Insert several cards atomically. Either every row lands or none does.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateCard]) -> Result<Vec<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut cards = Vec::with_capacity(inputs.len());
        for input in inputs {
            cards.push(Self::create(&mut *tx, input).await?);
        }
        tx.commit().await?;
        Ok(cards)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cards WHERE id = $1");
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cards newest first, optionally restricted by form and by a
    /// case-insensitive name substring.
    pub async fn list(pool: &PgPool, params: &CardListParams) -> Result<Vec<Card>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.form.is_some() {
            conditions.push(format!("form = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!("character_name ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM cards \
             {where_clause} \
             ORDER BY created_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Card>(&query);

        // Bind dynamic parameters in order.
        if let Some(form) = params.form {
            q = q.bind(form.as_str());
        }
        if let Some(ref search) = params.search {
            q = q.bind(like_pattern(search));
        }

        q.bind(params.limit).bind(params.offset).fetch_all(pool).await
    }

    /// Overwrite the supplied fields. Returns `None` if the card does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCard,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET
                character_name = COALESCE($2, character_name),
                form = COALESCE($3, form),
                image_url = COALESCE($4, image_url),
                series = COALESCE($5, series),
                event_name = COALESCE($6, event_name),
                description = COALESCE($7, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(&input.character_name)
            .bind(&input.form)
            .bind(&input.image_url)
            .bind(&input.series)
            .bind(&input.event_name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a card. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Point a card at an owner, or clear it with `None`.
    ///
    /// Overwrites any existing owner. Returns `None` if the card does not exist.
    pub async fn set_owner(
        pool: &PgPool,
        id: DbId,
        owner_id: Option<DbId>,
    ) -> Result<Option<Card>, sqlx::Error> {
        let query = format!(
            "UPDATE cards SET owner_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Cards owned by a player, ordered by name.
    pub async fn list_owned_by(pool: &PgPool, player_id: DbId) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards WHERE owner_id = $1 ORDER BY character_name, id"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(player_id)
            .fetch_all(pool)
            .await
    }

    /// Number of cards per form. Forms with no cards are absent.
    pub async fn count_by_form(pool: &PgPool) -> Result<Vec<FormCount>, sqlx::Error> {
        sqlx::query_as::<_, FormCount>(
            "SELECT form, COUNT(*) AS count FROM cards GROUP BY form ORDER BY form",
        )
        .fetch_all(pool)
        .await
    }

    /// The most recently created cards.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Card>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cards ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Card>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
