//! Handlers for the `/players` resource (admin directory lookup).

use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::response::DataResponse;
use crate::services::directory::{self, PlayerProfile};
use crate::state::AppState;

/// GET /api/v1/players/{discord_id}
///
/// An unknown id answers 404 with a "Player ... not found" message.
pub async fn get_player(
    State(state): State<AppState>,
    session: CurrentSession,
    Path(discord_id): Path<String>,
) -> AppResult<Json<DataResponse<PlayerProfile>>> {
    let profile =
        directory::find_player_by_discord_id(&state.pool, session.principal(), &discord_id)
            .await?;
    Ok(Json(DataResponse { data: profile }))
}
