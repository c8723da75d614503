//! Session tokens and OAuth `state` tokens.
//!
//! A session token is an HS256-signed JWT carrying the typed [`Principal`]
//! (`sub`, `username`, `role`) plus a unique `jti`. Logout revokes the `jti`
//! server-side. The OAuth `state` parameter is a short-lived JWT signed with
//! the same secret, so the callback can check it without server storage.

use cardforge_core::roles::{Principal, Role};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `purpose` claim of OAuth state tokens.
const OAUTH_STATE_PURPOSE: &str = "discord_oauth_state";

/// Lifetime of an OAuth state token in seconds.
const OAUTH_STATE_TTL_SECS: i64 = 600;

/// Default session lifetime in hours.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 168;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the principal's opaque id.
    pub sub: String,
    pub username: String,
    pub role: Role,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4), used for revocation on logout.
    pub jti: String,
}

impl Claims {
    pub fn principal(&self) -> Principal {
        Principal::new(self.sub.clone(), self.username.clone(), self.role)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StateClaims {
    purpose: String,
    exp: i64,
    iat: i64,
    nonce: String,
}

/// Configuration for session-token signing and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session lifetime in hours (default: 168).
    pub session_expiry_hours: i64,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_SESSION_EXPIRY_HOURS` | no       | `168`   |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let session_expiry_hours: i64 = std::env::var("JWT_SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_SESSION_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            session_expiry_hours,
        }
    }

    /// Session lifetime in seconds, as reported to clients.
    pub fn session_expiry_secs(&self) -> i64 {
        self.session_expiry_hours * 3600
    }
}

/// Issue a session token for a principal.
pub fn issue_session_token(
    principal: &Principal,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: principal.id.clone(),
        username: principal.username.clone(),
        role: principal.role,
        exp: now + config.session_expiry_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Issue a short-lived OAuth `state` value.
pub fn issue_oauth_state(config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = StateClaims {
        purpose: OAUTH_STATE_PURPOSE.to_string(),
        exp: now + OAUTH_STATE_TTL_SECS,
        iat: now,
        nonce: Uuid::new_v4().to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check an OAuth `state` value returned to the callback.
pub fn verify_oauth_state(state: &str, config: &JwtConfig) -> bool {
    decode::<StateClaims>(
        state,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.purpose == OAUTH_STATE_PURPOSE)
    .unwrap_or(false)
}
