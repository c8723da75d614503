//! The notification sink abstraction and its fire-and-forget dispatcher.

use std::sync::Arc;

use async_trait::async_trait;

use crate::delivery::webhook::WebhookError;
use crate::notice::CardNotice;

/// Failure of a single notification attempt.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error(transparent)]
    Webhook(#[from] WebhookError),

    #[error("Notifier unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere catalog notices can be sent.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notice: &CardNotice) -> Result<(), NotifyError>;
}

/// Sink used when no webhook is configured. Drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, notice: &CardNotice) -> Result<(), NotifyError> {
        tracing::debug!(card_id = notice.card_id, "No notifier configured, dropping notice");
        Ok(())
    }
}

/// Send a notice in the background, at most once.
///
/// Must be called after the change it announces has committed. Failures are
/// logged and dropped; the caller never learns the outcome.
pub fn dispatch(notifier: Arc<dyn Notifier>, notice: CardNotice) {
    tokio::spawn(async move {
        match notifier.notify(&notice).await {
            Ok(()) => tracing::debug!(
                card_id = notice.card_id,
                event_type = %notice.event_type,
                "Card notice delivered"
            ),
            Err(e) => tracing::warn!(
                card_id = notice.card_id,
                event_type = %notice.event_type,
                error = %e,
                "Card notice dropped"
            ),
        }
    });
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::notice::EVENT_CARD_CREATED;

    struct Failing(Arc<AtomicUsize>);

    #[async_trait]
    impl Notifier for Failing {
        async fn notify(&self, _notice: &CardNotice) -> Result<(), NotifyError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError::Unavailable("down".into()))
        }
    }

    #[tokio::test]
    async fn noop_notifier_accepts_everything() {
        let notice = CardNotice::new(EVENT_CARD_CREATED, 1, "Nyx", "base", "http://x");
        assert!(NoopNotifier.notify(&notice).await.is_ok());
    }

    #[tokio::test]
    async fn dispatch_attempts_once_and_swallows_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let notifier: Arc<dyn Notifier> = Arc::new(Failing(Arc::clone(&calls)));

        dispatch(notifier, CardNotice::new(EVENT_CARD_CREATED, 1, "Nyx", "base", "http://x"));

        for _ in 0..50 {
            if calls.load(Ordering::SeqCst) > 0 {
                break;
            }
            tokio::task::yield_now().await;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1, "no retries");
    }
}
