//! Route definitions for the `/submissions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Routes mounted at `/submissions`.
///
/// ```text
/// GET  /                 -> list_pending (admin)
/// POST /                 -> submit (card_maker)
/// GET  /mine             -> list_mine (card_maker)
/// POST /{id}/decision    -> decide (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submissions::list_pending).post(submissions::submit),
        )
        .route("/mine", get(submissions::list_mine))
        .route("/{id}/decision", post(submissions::decide))
}
