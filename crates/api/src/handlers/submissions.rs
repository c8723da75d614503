//! Handlers for the `/submissions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cardforge_core::submissions::SubmissionDraft;
use cardforge_core::types::DbId;
use cardforge_db::models::submission::PendingSubmission;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::services::submissions::{self, DecisionOutcome};
use crate::state::AppState;

/// Request body for `POST /submissions/{id}/decision`.
#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub action: String,
}

/// POST /api/v1/submissions
///
/// Queue a card proposal (card makers only). Returns 201 Created.
pub async fn submit(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(draft): Json<SubmissionDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<PendingSubmission>>)> {
    let submission = submissions::submit(&state.pool, session.principal(), &draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/submissions/mine
pub async fn list_mine(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<Vec<PendingSubmission>>>> {
    let data = submissions::list_own(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/submissions
///
/// The review queue, newest first.
pub async fn list_pending(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<PendingSubmission>>>> {
    let data =
        submissions::list_pending(&state.pool, session.principal(), params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/submissions/{id}/decision
///
/// Approve or reject a pending submission (admins only).
pub async fn decide(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
    Json(input): Json<DecisionRequest>,
) -> AppResult<Json<DataResponse<DecisionOutcome>>> {
    let outcome = submissions::decide(
        &state.pool,
        &state.notifier,
        session.principal(),
        id,
        &input.action,
    )
    .await?;
    Ok(Json(DataResponse { data: outcome }))
}
