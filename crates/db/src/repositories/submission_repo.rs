//! Repository for the `pending_submissions` table, including the approval
//! promotion into `cards`.

use cardforge_core::cards::CardForm;
use cardforge_core::submissions::{QUEUE_ACTION_CREATED, STATUS_PENDING};
use cardforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::card::{Card, CreateCard};
use crate::models::submission::{CreateSubmission, PendingSubmission};
use crate::repositories::{CardQueueRepo, CardRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, form_type, series, event_name, image_url, \
                        submitted_by, status, created_at";

/// Provides queue operations for card submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Queue a new submission in the `pending` state.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<PendingSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO pending_submissions
                (title, form_type, series, event_name, image_url, submitted_by, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PendingSubmission>(&query)
            .bind(&input.title)
            .bind(input.form_type.as_str())
            .bind(&input.series)
            .bind(&input.event_name)
            .bind(&input.image_url)
            .bind(&input.submitted_by)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    /// Find a submission that is still awaiting a decision.
    pub async fn find_pending(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PendingSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pending_submissions WHERE id = $1 AND status = $2"
        );
        sqlx::query_as::<_, PendingSubmission>(&query)
            .bind(id)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// The review queue, newest first.
    pub async fn list_pending(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PendingSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pending_submissions
             WHERE status = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PendingSubmission>(&query)
            .bind(STATUS_PENDING)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Pending submissions made by one submitter, newest first.
    pub async fn list_by_submitter(
        pool: &PgPool,
        submitted_by: &str,
    ) -> Result<Vec<PendingSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pending_submissions
             WHERE submitted_by = $1 AND status = $2
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PendingSubmission>(&query)
            .bind(submitted_by)
            .bind(STATUS_PENDING)
            .fetch_all(pool)
            .await
    }

    /// Promote a pending submission into an approved catalog card.
    ///
    /// In one transaction: lock the submission row, insert the card, delete
    /// the submission, and append a `created` entry to `card_queue`. Returns
    /// `None` (and changes nothing) when no pending row with `id` exists,
    /// including when a concurrent decision removed it first.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Card>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM pending_submissions
             WHERE id = $1 AND status = $2
             FOR UPDATE"
        );
        let submission = sqlx::query_as::<_, PendingSubmission>(&query)
            .bind(id)
            .bind(STATUS_PENDING)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(submission) = submission else {
            tracing::debug!(submission_id = id, "No pending submission to approve");
            tx.rollback().await?;
            return Ok(None);
        };

        // The CHECK constraint keeps form_type within the known forms.
        let form = submission
            .form_type
            .parse::<CardForm>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let input = CreateCard {
            character_name: submission.title,
            form,
            image_url: submission.image_url,
            series: submission.series,
            event_name: submission.event_name,
            description: None,
            approved: true,
        };
        let card = CardRepo::create(&mut *tx, &input).await?;

        sqlx::query("DELETE FROM pending_submissions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        CardQueueRepo::append(&mut *tx, card.id, QUEUE_ACTION_CREATED).await?;

        tx.commit().await?;
        Ok(Some(card))
    }

    /// Reject a pending submission by deleting it.
    ///
    /// Returns `true` if a pending row was removed.
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM pending_submissions WHERE id = $1 AND status = $2")
                .bind(id)
                .bind(STATUS_PENDING)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count_pending(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM pending_submissions WHERE status = $1")
                .bind(STATUS_PENDING)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}
