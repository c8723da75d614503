//! Handlers for the `/auth` resource (password login, Discord login, logout).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use cardforge_core::error::CoreError;
use cardforge_core::roles::Principal;
use cardforge_db::repositories::RevokedTokenRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{issue_oauth_state, issue_session_token, verify_oauth_state};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentSession;
use crate::query::OAuthCallbackQuery;
use crate::response::DataResponse;
use crate::services::accounts;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub principal: Principal,
    /// Discord avatar, for Discord logins with an avatar set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate a back-office account with username + password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<SessionResponse>> {
    let principal = accounts::authenticate(&state.pool, &input.username, &input.password).await?;
    tracing::info!(principal = %principal.username, role = %principal.role, "Login");
    Ok(Json(session_response(&state, principal, None)?))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented session token. Anonymous calls are a no-op.
pub async fn logout(
    State(state): State<AppState>,
    session: CurrentSession,
) -> AppResult<StatusCode> {
    if let Some(jti) = session.jti() {
        RevokedTokenRepo::revoke(&state.pool, jti).await?;
        if let Some(principal) = session.principal() {
            tracing::info!(principal = %principal.username, "Logout");
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(session: CurrentSession) -> AppResult<Json<DataResponse<Principal>>> {
    let principal = session
        .principal()
        .cloned()
        .ok_or_else(CoreError::login_required)?;
    Ok(Json(DataResponse { data: principal }))
}

/// GET /api/v1/auth/discord/login
///
/// Redirect the browser to Discord's consent screen.
pub async fn discord_login(State(state): State<AppState>) -> AppResult<Redirect> {
    let discord = state.discord.as_ref().ok_or_else(discord_disabled)?;
    let oauth_state = issue_oauth_state(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("State token error: {e}")))?;
    let url = discord
        .authorize_url(&oauth_state)
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(Redirect::to(url.as_str()))
}

/// GET /api/v1/auth/discord/callback
///
/// Finish the Discord flow and issue a session token. Ids listed in
/// `DISCORD_ADMIN_IDS` receive the `admin` role, everyone else `player`.
pub async fn discord_callback(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackQuery>,
) -> AppResult<Json<SessionResponse>> {
    let discord = state.discord.as_ref().ok_or_else(discord_disabled)?;

    if let Some(error) = params.error {
        return Err(CoreError::Unauthorized(format!("Discord login failed: {error}")).into());
    }
    let oauth_state = params.state.unwrap_or_default();
    if !verify_oauth_state(&oauth_state, &state.config.jwt) {
        return Err(AppError::BadRequest("Invalid or expired OAuth state".into()));
    }
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing authorization code".into()))?;

    let user = discord.identify(&code).await.map_err(|e| {
        tracing::warn!(error = %e, "Discord exchange failed");
        CoreError::Unauthorized("Discord login failed".into())
    })?;

    let role = discord.role_for(&user.id);
    let avatar_url = user.avatar_url();
    let principal = Principal::new(user.id, user.username, role);
    tracing::info!(principal = %principal.username, role = %role, "Discord login");

    Ok(Json(session_response(&state, principal, avatar_url)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session_response(
    state: &AppState,
    principal: Principal,
    avatar_url: Option<String>,
) -> AppResult<SessionResponse> {
    let token = issue_session_token(&principal, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(SessionResponse {
        token,
        expires_in: state.config.jwt.session_expiry_secs(),
        principal,
        avatar_url,
    })
}

fn discord_disabled() -> AppError {
    AppError::NotFound("Discord login is not configured".into())
}
