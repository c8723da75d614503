//! Outbound catalog notifications.
//!
//! - [`CardNotice`] -- the payload announcing a catalog change.
//! - [`Notifier`] -- the sink abstraction; [`NoopNotifier`] when none is configured.
//! - [`delivery::webhook::WebhookNotifier`] -- HTTP POST delivery, one attempt.
//! - [`dispatch`] -- fire-and-forget hand-off that never reports back.

pub mod delivery;
pub mod notice;
pub mod notifier;

pub use delivery::webhook::{WebhookError, WebhookNotifier};
pub use notice::CardNotice;
pub use notifier::{dispatch, NoopNotifier, Notifier, NotifyError};
