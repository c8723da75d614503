//! Handlers for the `/cards` resource: catalog and ownership.
//!
//! All handlers require the `admin` role; the check happens in the service
//! layer.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cardforge_core::cards::CardDraft;
use cardforge_core::types::DbId;
use cardforge_db::models::card::{Card, UpdateCard};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::query::CardListQuery;
use crate::response::DataResponse;
use crate::services::catalog::{self, CardFormsDraft};
use crate::services::ownership;
use crate::state::AppState;

/// Request body for `PUT /cards/{id}/owner`.
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    #[serde(default)]
    pub discord_id: String,
}

/// GET /api/v1/cards?form=&search=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(params): Query<CardListQuery>,
) -> AppResult<Json<DataResponse<Vec<Card>>>> {
    let data = catalog::list(
        &state.pool,
        session.principal(),
        params.form.as_deref(),
        params.search.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/cards
pub async fn create(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(draft): Json<CardDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<Card>>)> {
    let card = catalog::create(&state.pool, &state.notifier, session.principal(), &draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: card })))
}

/// POST /api/v1/cards/forms
///
/// Create one card per supplied form image.
pub async fn create_forms(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(draft): Json<CardFormsDraft>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Card>>>)> {
    let cards = catalog::create_forms(&state.pool, session.principal(), &draft).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: cards })))
}

/// GET /api/v1/cards/{id}
pub async fn get_card(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Card>>> {
    let card = catalog::get(&state.pool, session.principal(), id).await?;
    Ok(Json(DataResponse { data: card }))
}

/// PUT /api/v1/cards/{id}
pub async fn update(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
    Json(fields): Json<UpdateCard>,
) -> AppResult<Json<DataResponse<Card>>> {
    let card = catalog::update(&state.pool, session.principal(), id, &fields).await?;
    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/cards/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    catalog::delete(&state.pool, session.principal(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/cards/{id}/owner
pub async fn assign(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
    Json(input): Json<AssignRequest>,
) -> AppResult<Json<DataResponse<Card>>> {
    let card = ownership::assign(&state.pool, session.principal(), id, &input.discord_id).await?;
    Ok(Json(DataResponse { data: card }))
}

/// DELETE /api/v1/cards/{id}/owner
pub async fn unassign(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Card>>> {
    let card = ownership::unassign(&state.pool, session.principal(), id).await?;
    Ok(Json(DataResponse { data: card }))
}
