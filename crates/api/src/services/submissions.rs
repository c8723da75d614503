//! Submission queue: card makers propose cards, admins decide them.

use std::sync::Arc;

use cardforge_core::error::CoreError;
use cardforge_core::pagination::{clamp_limit, clamp_offset};
use cardforge_core::roles::{authorize, Principal, Role};
use cardforge_core::submissions::{optional_text, Decision, SubmissionDraft};
use cardforge_core::types::DbId;
use cardforge_db::models::card::Card;
use cardforge_db::models::submission::{CreateSubmission, PendingSubmission};
use cardforge_db::repositories::SubmissionRepo;
use cardforge_db::DbPool;
use cardforge_events::notice::EVENT_CARD_APPROVED;
use cardforge_events::{dispatch, CardNotice, Notifier};
use serde::Serialize;

use crate::error::AppResult;

/// Default and maximum page size for the review queue.
const QUEUE_PAGE_LIMIT: i64 = 50;

/// Result of [`decide`].
#[derive(Debug, Serialize)]
pub struct DecisionOutcome {
    pub submission_id: DbId,
    pub action: Decision,
    /// The promoted card, present only for approvals.
    pub card: Option<Card>,
}

/// Queue a new card proposal with status `pending`.
///
/// Identical resubmissions create independent rows.
pub async fn submit(
    pool: &DbPool,
    principal: Option<&Principal>,
    draft: &SubmissionDraft,
) -> AppResult<PendingSubmission> {
    let principal = authorize(principal, Role::CardMaker)?;
    let form = draft.check()?;

    let input = CreateSubmission {
        title: draft.title.trim().to_string(),
        form_type: form,
        series: optional_text(draft.series.as_deref()),
        event_name: optional_text(draft.event_name.as_deref()),
        image_url: draft.image_url.trim().to_string(),
        submitted_by: principal.username.clone(),
    };
    let submission = SubmissionRepo::create(pool, &input).await?;

    tracing::info!(
        submission_id = submission.id,
        submitted_by = %submission.submitted_by,
        form_type = %submission.form_type,
        "Card submission queued",
    );
    Ok(submission)
}

/// Approve or reject a pending submission.
///
/// `action` is `approved` or `rejected`; anything else is a validation
/// failure on `action`. Approval promotes the row into the catalog in one transaction, then
/// announces the card through `notifier` without waiting for delivery.
/// An id with no pending row yields `NotFound` and changes nothing.
pub async fn decide(
    pool: &DbPool,
    notifier: &Arc<dyn Notifier>,
    principal: Option<&Principal>,
    submission_id: DbId,
    action: &str,
) -> AppResult<DecisionOutcome> {
    let principal = authorize(principal, Role::Admin)?;
    let action: Decision = action.parse()?;

    let card = match action {
        Decision::Approved => {
            let card = SubmissionRepo::approve(pool, submission_id)
                .await?
                .ok_or_else(|| CoreError::not_found("Submission", submission_id))?;

            tracing::info!(
                submission_id,
                card_id = card.id,
                admin = %principal.username,
                "Submission approved",
            );

            let notice = CardNotice::new(
                EVENT_CARD_APPROVED,
                card.id,
                card.character_name.clone(),
                card.form.clone(),
                card.image_url.clone(),
            )
            .with_series(card.series.clone())
            .with_event_name(card.event_name.clone());
            dispatch(Arc::clone(notifier), notice);

            Some(card)
        }
        Decision::Rejected => {
            if !SubmissionRepo::reject(pool, submission_id).await? {
                return Err(CoreError::not_found("Submission", submission_id).into());
            }
            tracing::info!(
                submission_id,
                admin = %principal.username,
                "Submission rejected",
            );
            None
        }
    };

    Ok(DecisionOutcome {
        submission_id,
        action,
        card,
    })
}

/// Pending submissions, newest first.
pub async fn list_pending(
    pool: &DbPool,
    principal: Option<&Principal>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> AppResult<Vec<PendingSubmission>> {
    authorize(principal, Role::Admin)?;
    let limit = clamp_limit(limit, QUEUE_PAGE_LIMIT, QUEUE_PAGE_LIMIT);
    let offset = clamp_offset(offset);
    Ok(SubmissionRepo::list_pending(pool, limit, offset).await?)
}

/// The caller's own pending submissions, newest first.
pub async fn list_own(
    pool: &DbPool,
    principal: Option<&Principal>,
) -> AppResult<Vec<PendingSubmission>> {
    let principal = authorize(principal, Role::CardMaker)?;
    Ok(SubmissionRepo::list_by_submitter(pool, &principal.username).await?)
}
