//! Handlers for the `/me` resource: a Discord-authenticated player's own data.

use axum::extract::State;
use axum::Json;
use cardforge_db::models::card::{Card, TeamSlot};

use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::response::DataResponse;
use crate::services::directory::{self, PlayerProfile};
use crate::state::AppState;

/// GET /api/v1/me/profile
pub async fn profile(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<PlayerProfile>>> {
    let data = directory::own_profile(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/me/inventory
pub async fn inventory(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<Vec<Card>>>> {
    let data = directory::own_inventory(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/me/team
pub async fn team(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<Json<DataResponse<Vec<TeamSlot>>>> {
    let data = directory::own_team(&state.pool, session.principal()).await?;
    Ok(Json(DataResponse { data }))
}
