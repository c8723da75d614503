//! Route definitions for the `/me` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::me;
use crate::state::AppState;

/// Routes mounted at `/me`. All require the `player` role.
///
/// ```text
/// GET /profile     -> profile
/// GET /inventory   -> inventory
/// GET /team        -> team
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(me::profile))
        .route("/inventory", get(me::inventory))
        .route("/team", get(me::team))
}
