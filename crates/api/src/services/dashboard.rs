//! Admin dashboard summary.

use cardforge_core::cards::CardForm;
use cardforge_core::pagination::DASHBOARD_PANEL_SIZE;
use cardforge_core::players::display_date;
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::types::DbId;
use cardforge_db::models::card::{Card, FormCount};
use cardforge_db::models::submission::PendingSubmission;
use cardforge_db::repositories::{CardRepo, SubmissionRepo};
use cardforge_db::DbPool;
use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    /// One entry per known form, zero when the catalog has none.
    pub form_counts: Vec<FormCount>,
    pub total_cards: i64,
    pub pending_count: i64,
    pub recent_cards: Vec<RecentCard>,
    pub pending_submissions: Vec<PendingEntry>,
}

#[derive(Debug, Serialize)]
pub struct RecentCard {
    pub id: DbId,
    pub character_name: String,
    pub form: String,
    pub created_on: String,
}

impl From<Card> for RecentCard {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            character_name: card.character_name,
            form: card.form,
            created_on: display_date(card.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PendingEntry {
    pub id: DbId,
    pub title: String,
    pub form_type: String,
    pub submitted_by: String,
    pub created_on: String,
}

impl From<PendingSubmission> for PendingEntry {
    fn from(s: PendingSubmission) -> Self {
        Self {
            id: s.id,
            title: s.title,
            form_type: s.form_type,
            submitted_by: s.submitted_by,
            created_on: display_date(s.created_at),
        }
    }
}

/// Fill in zero counts for forms with no cards, in [`CardForm::ALL`] order.
pub fn complete_form_counts(counts: &[FormCount]) -> Vec<FormCount> {
    CardForm::ALL
        .iter()
        .map(|form| FormCount {
            form: form.as_str().to_string(),
            count: counts
                .iter()
                .find(|c| c.form == form.as_str())
                .map_or(0, |c| c.count),
        })
        .collect()
}

pub async fn summary(pool: &DbPool, principal: Option<&Principal>) -> AppResult<DashboardSummary> {
    authorize(principal, Role::Admin)?;

    let form_counts = complete_form_counts(&CardRepo::count_by_form(pool).await?);
    let total_cards = form_counts.iter().map(|c| c.count).sum();
    let pending_count = SubmissionRepo::count_pending(pool).await?;
    let recent_cards = CardRepo::recent(pool, DASHBOARD_PANEL_SIZE).await?;
    let pending = SubmissionRepo::list_pending(pool, DASHBOARD_PANEL_SIZE, 0).await?;

    Ok(DashboardSummary {
        form_counts,
        total_cards,
        pending_count,
        recent_cards: recent_cards.into_iter().map(RecentCard::from).collect(),
        pending_submissions: pending.into_iter().map(PendingEntry::from).collect(),
    })
}
