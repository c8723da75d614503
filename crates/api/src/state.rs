use std::sync::Arc;

use cardforge_events::Notifier;

use crate::auth::discord::{DiscordClient, DiscordError};
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cardforge_db::DbPool,
    /// Server configuration (session secret, webhook URL, ...).
    pub config: Arc<ServerConfig>,
    /// Sink for catalog change notices.
    pub notifier: Arc<dyn Notifier>,
    /// Discord identity adapter, when Discord login is configured.
    pub discord: Option<Arc<DiscordClient>>,
}

impl AppState {
    /// Assemble state, building the Discord client when it is configured.
    pub fn new(
        pool: cardforge_db::DbPool,
        config: ServerConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, DiscordError> {
        let discord = config
            .discord
            .clone()
            .map(DiscordClient::new)
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            pool,
            config: Arc::new(config),
            notifier,
            discord,
        })
    }
}
