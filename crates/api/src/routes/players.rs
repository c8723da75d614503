//! Route definitions for the `/players` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::players;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET /{discord_id}   -> get_player (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{discord_id}", get(players::get_player))
}
