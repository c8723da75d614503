use axum::extract::State;
use axum::{routing::get, Json, Router};
use cardforge_db::repositories::SubmissionRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, otherwise `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Depth of the review queue. Absent when the database is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_submissions: Option<i64>,
    /// Whether `/auth/discord/*` is configured.
    pub discord_login: bool,
}

/// GET /health
///
/// Counting the review queue doubles as the database probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let pending_submissions = match SubmissionRepo::count_pending(&state.pool).await {
        Ok(n) => Some(n),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the review queue");
            None
        }
    };
    let db_healthy = pending_submissions.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pending_submissions,
        discord_login: state.discord.is_some(),
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
