#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use cardforge_api::auth::jwt::{issue_session_token, JwtConfig};
use cardforge_api::config::ServerConfig;
use cardforge_api::router::build_app_router;
use cardforge_api::state::AppState;
use cardforge_core::roles::{Principal, Role};
use cardforge_events::{CardNotice, NoopNotifier, Notifier, NotifyError};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio::sync::mpsc;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Notifications and Discord login are off; tokens are signed with a fixed
/// secret so tests can mint their own.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            session_expiry_hours: 1,
        },
        card_webhook_url: None,
        discord: None,
    }
}

/// Build the full application router, using the given database pool and a
/// notifier that drops everything.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(NoopNotifier))
}

/// Build the full application router with a custom notifier.
///
/// Uses the same [`build_app_router`] as `main.rs`, so the middleware stack
/// matches production.
pub fn build_test_app_with(pool: PgPool, notifier: Arc<dyn Notifier>) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone(), notifier).unwrap();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

pub fn token_for(id: &str, username: &str, role: Role) -> String {
    let principal = Principal::new(id, username, role);
    issue_session_token(&principal, &test_config().jwt).unwrap()
}

pub fn admin_token() -> String {
    token_for("1", "root", Role::Admin)
}

pub fn maker_token() -> String {
    token_for("2", "maker", Role::CardMaker)
}

/// A player session whose principal id is the Discord id.
pub fn player_token(discord_id: &str) -> String {
    token_for(discord_id, "player", Role::Player)
}

// ---------------------------------------------------------------------------
// Notifiers
// ---------------------------------------------------------------------------

/// Forwards every notice to a channel so tests can await background delivery.
pub struct RecordingNotifier {
    tx: mpsc::UnboundedSender<CardNotice>,
}

impl RecordingNotifier {
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<CardNotice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: &CardNotice) -> Result<(), NotifyError> {
        let _ = self.tx.send(notice.clone());
        Ok(())
    }
}

/// Always fails, as an unreachable webhook would.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _notice: &CardNotice) -> Result<(), NotifyError> {
        Err(NotifyError::Unavailable("webhook down".into()))
    }
}

/// Wait for the next recorded notice.
pub async fn next_notice(rx: &mut mpsc::UnboundedReceiver<CardNotice>) -> CardNotice {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for a card notice")
        .expect("notifier channel closed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send an arbitrary request, optionally authenticated.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    send(app, method, uri, token, body).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Database probes
// ---------------------------------------------------------------------------

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
