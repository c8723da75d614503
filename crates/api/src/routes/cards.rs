//! Route definitions for the `/cards` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::cards;
use crate::state::AppState;

/// Routes mounted at `/cards`. All require the `admin` role.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// POST   /forms         -> create_forms
/// GET    /{id}          -> get_card
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PUT    /{id}/owner    -> assign
/// DELETE /{id}/owner    -> unassign
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cards::list).post(cards::create))
        .route("/forms", post(cards::create_forms))
        .route(
            "/{id}",
            get(cards::get_card).put(cards::update).delete(cards::delete),
        )
        .route("/{id}/owner", put(cards::assign).delete(cards::unassign))
}
