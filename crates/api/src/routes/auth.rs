//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /login              -> login
/// POST /logout             -> logout
/// GET  /me                 -> me
/// GET  /discord/login      -> discord_login
/// GET  /discord/callback   -> discord_callback
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/discord/login", get(auth::discord_login))
        .route("/discord/callback", get(auth::discord_callback))
}
