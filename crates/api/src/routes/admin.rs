//! Route definitions for the `/admin` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// All routes require the `admin` role (enforced in the service layer).
///
/// ```text
/// GET  /dashboard        -> dashboard
/// GET  /accounts         -> list_accounts
/// POST /accounts         -> create_account
/// PUT  /accounts/{id}    -> update_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(admin::dashboard))
        .route(
            "/accounts",
            get(admin::list_accounts).post(admin::create_account),
        )
        .route("/accounts/{id}", put(admin::update_account))
}
