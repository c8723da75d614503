//! Discord OAuth2 identity provider.
//!
//! Implements the authorization-code flow with the `identify` scope: build the
//! authorize URL, exchange the returned code for an access token, then fetch
//! the user's identity from `users/@me`.

use std::collections::HashSet;

use cardforge_core::players::discord_avatar_url;
use cardforge_core::roles::Role;
use reqwest::Url;
use serde::Deserialize;

const AUTHORIZE_URL: &str = "https://discord.com/oauth2/authorize";
const TOKEN_URL: &str = "https://discord.com/api/oauth2/token";
const USER_URL: &str = "https://discord.com/api/users/@me";
const SCOPE: &str = "identify";

/// Errors from the Discord OAuth exchange.
#[derive(Debug, thiserror::Error)]
pub enum DiscordError {
    #[error("Discord request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Discord returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid Discord URL: {0}")]
    Url(String),
}

/// OAuth application settings.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// Discord user ids granted the `admin` role on login.
    pub admin_ids: HashSet<String>,
}

impl DiscordConfig {
    /// Load Discord settings from the environment.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `DISCORD_CLIENT_ID`     | no       | --      |
    /// | `DISCORD_CLIENT_SECRET` | no       | --      |
    /// | `DISCORD_REDIRECT_URI`  | no       | --      |
    /// | `DISCORD_ADMIN_IDS`     | no       | empty   |
    ///
    /// Returns `None` unless client id, secret and redirect URI are all set.
    pub fn from_env() -> Option<Self> {
        let client_id = non_empty_var("DISCORD_CLIENT_ID")?;
        let client_secret = non_empty_var("DISCORD_CLIENT_SECRET")?;
        let redirect_uri = non_empty_var("DISCORD_REDIRECT_URI")?;
        let admin_ids = parse_admin_ids(&std::env::var("DISCORD_ADMIN_IDS").unwrap_or_default());

        Some(Self {
            client_id,
            client_secret,
            redirect_uri,
            admin_ids,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a comma-separated list of Discord ids.
pub fn parse_admin_ids(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Identity returned by `users/@me`.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

impl DiscordUser {
    pub fn avatar_url(&self) -> Option<String> {
        discord_avatar_url(&self.id, self.avatar.as_deref())
    }
}

/// HTTP client for the Discord OAuth endpoints.
pub struct DiscordClient {
    client: reqwest::Client,
    config: DiscordConfig,
}

impl DiscordClient {
    pub fn new(config: DiscordConfig) -> Result<Self, DiscordError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        Ok(Self { client, config })
    }

    /// Browser redirect target for the login step.
    pub fn authorize_url(&self, state: &str) -> Result<Url, DiscordError> {
        Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", SCOPE),
                ("state", state),
            ],
        )
        .map_err(|e| DiscordError::Url(e.to_string()))
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, DiscordError> {
        let response = self
            .client
            .post(TOKEN_URL)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordError::HttpStatus(status.as_u16()));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Fetch the identity behind an access token.
    pub async fn fetch_user(&self, access_token: &str) -> Result<DiscordUser, DiscordError> {
        let response = self
            .client
            .get(USER_URL)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscordError::HttpStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }

    /// Run both halves of the callback: code exchange, then identity fetch.
    pub async fn identify(&self, code: &str) -> Result<DiscordUser, DiscordError> {
        let access_token = self.exchange_code(code).await?;
        self.fetch_user(&access_token).await
    }

    /// Role granted to a Discord user on login.
    pub fn role_for(&self, discord_id: &str) -> Role {
        if self.config.admin_ids.contains(discord_id) {
            Role::Admin
        } else {
            Role::Player
        }
    }
}
