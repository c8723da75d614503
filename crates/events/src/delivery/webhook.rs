//! Webhook delivery, a single attempt per notice.
//!
//! [`WebhookNotifier`] POSTs a JSON-encoded [`CardNotice`] to a configured
//! URL. Failed deliveries are not retried.

use std::time::Duration;

use async_trait::async_trait;

use crate::notice::CardNotice;
use crate::notifier::{Notifier, NotifyError};

/// HTTP request timeout for a delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for webhook delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// WebhookNotifier
// ---------------------------------------------------------------------------

/// Delivers catalog notices to one external webhook endpoint.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    /// Create a notifier with a pre-configured HTTP client.
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the JSON body. `content` carries a readable summary so chat
    /// webhooks render something useful; the remaining keys are structured.
    pub fn payload(notice: &CardNotice) -> serde_json::Value {
        serde_json::json!({
            "content": notice.summary(),
            "event_type": notice.event_type,
            "card": {
                "id": notice.card_id,
                "name": notice.name,
                "form": notice.form,
                "series": notice.series,
                "event_name": notice.event_name,
                "image_url": notice.image_url,
            },
            "timestamp": notice.timestamp,
        })
    }

    /// Execute one POST request and check the response status.
    pub async fn send(&self, notice: &CardNotice) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(&self.url)
            .json(&Self::payload(notice))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notice: &CardNotice) -> Result<(), NotifyError> {
        self.send(notice).await.map_err(NotifyError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::EVENT_CARD_APPROVED;

    #[test]
    fn new_does_not_fail() {
        let notifier = WebhookNotifier::new("http://localhost:9/hook").unwrap();
        assert_eq!(notifier.url(), "http://localhost:9/hook");
    }

    #[test]
    fn webhook_error_display_http_status() {
        let err = WebhookError::HttpStatus(502);
        assert_eq!(err.to_string(), "Webhook returned HTTP 502");
    }

    #[test]
    fn webhook_error_display_request() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = WebhookError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }

    #[test]
    fn payload_carries_card_fields() {
        let notice = CardNotice::new(EVENT_CARD_APPROVED, 7, "Nyx", "event", "http://x/n.png")
            .with_event_name(Some("Halloween".into()));
        let body = WebhookNotifier::payload(&notice);

        assert_eq!(body["event_type"], "card.approved");
        assert_eq!(body["card"]["id"], 7);
        assert_eq!(body["card"]["name"], "Nyx");
        assert_eq!(body["card"]["form"], "event");
        assert_eq!(body["card"]["series"], serde_json::Value::Null);
        assert_eq!(body["card"]["event_name"], "Halloween");
        assert_eq!(body["card"]["image_url"], "http://x/n.png");
        assert!(body["content"].as_str().unwrap().contains("Nyx"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_fails_once() {
        // Port 9 (discard) is closed on test hosts; the attempt must fail fast.
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/hook").unwrap();
        let notice = CardNotice::new(EVENT_CARD_APPROVED, 1, "Nyx", "base", "http://x");
        assert!(notifier.notify(&notice).await.is_err());
    }
}
