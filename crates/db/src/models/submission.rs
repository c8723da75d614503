//! Pending submission model and DTOs.

use cardforge_core::cards::CardForm;
use cardforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `pending_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PendingSubmission {
    pub id: DbId,
    pub title: String,
    pub form_type: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub image_url: String,
    pub submitted_by: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for queueing a submission. Validated upstream.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub title: String,
    pub form_type: CardForm,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub image_url: String,
    pub submitted_by: String,
}
