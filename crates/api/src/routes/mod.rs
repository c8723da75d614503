pub mod admin;
pub mod auth;
pub mod cards;
pub mod health;
pub mod me;
pub mod players;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                      password login (public)
/// /auth/logout                     revoke current token
/// /auth/me                         current principal
/// /auth/discord/login              redirect to Discord
/// /auth/discord/callback           finish Discord login
///
/// /submissions                     submit (card_maker), review queue (admin)
/// /submissions/mine                own pending submissions (card_maker)
/// /submissions/{id}/decision       approve / reject (admin)
///
/// /cards                           list, create (admin)
/// /cards/forms                     one card per form (admin)
/// /cards/{id}                      get, update, delete (admin)
/// /cards/{id}/owner                assign, unassign (admin)
///
/// /players/{discord_id}            directory lookup (admin)
///
/// /me/profile                      own profile (player)
/// /me/inventory                    own cards (player)
/// /me/team                         own team (player)
///
/// /admin/dashboard                 catalog summary (admin)
/// /admin/accounts                  list, create (admin)
/// /admin/accounts/{id}             update (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/submissions", submissions::router())
        .nest("/cards", cards::router())
        .nest("/players", players::router())
        .nest("/me", me::router())
        .nest("/admin", admin::router())
}
