//! Session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use cardforge_core::roles::Principal;
use cardforge_db::repositories::RevokedTokenRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller's session, if any.
///
/// Never rejects for a missing, malformed, expired or revoked token: such
/// requests are treated as anonymous and the service-layer gate answers them
/// with the uniform "Login required" error.
///
/// ```ignore
/// async fn handler(session: CurrentSession) -> AppResult<Json<()>> {
///     let principal = authorize(session.principal(), Role::Admin)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrentSession {
    principal: Option<Principal>,
    /// Token id, used by logout to revoke the session.
    jti: Option<String>,
}

impl CurrentSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn jti(&self) -> Option<&str> {
        self.jti.as_deref()
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Self::anonymous());
        };

        let claims = match validate_token(token, &state.config.jwt) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring invalid session token");
                return Ok(Self::anonymous());
            }
        };

        if RevokedTokenRepo::is_revoked(&state.pool, &claims.jti).await? {
            tracing::debug!(jti = %claims.jti, "Ignoring revoked session token");
            return Ok(Self::anonymous());
        }

        Ok(Self {
            principal: Some(claims.principal()),
            jti: Some(claims.jti),
        })
    }
}
