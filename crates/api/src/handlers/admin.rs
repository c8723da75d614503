//! Handlers for the `/admin` resource (dashboard and account management).
//!
//! All handlers require the `admin` role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cardforge_core::types::DbId;
use cardforge_db::models::admin::{AdminResponse, UpdateAdmin};

use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::response::DataResponse;
use crate::services::accounts::{self, NewAccount};
use crate::services::dashboard::{self, DashboardSummary};
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let data = dashboard::summary(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/admin/accounts
pub async fn list_accounts(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<Vec<AdminResponse>>>> {
    let data = accounts::list(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/admin/accounts
///
/// Create a back-office account. Returns 201 Created without the hash.
pub async fn create_account(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(input): Json<NewAccount>,
) -> AppResult<(StatusCode, Json<DataResponse<AdminResponse>>)> {
    let account = accounts::create(&state.pool, session.principal(), &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: account })))
}

/// PUT /api/v1/admin/accounts/{id}
pub async fn update_account(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdmin>,
) -> AppResult<Json<DataResponse<AdminResponse>>> {
    let account = accounts::update(&state.pool, session.principal(), id, &input).await?;
    Ok(Json(DataResponse { data: account }))
}
