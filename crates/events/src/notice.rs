//! Catalog change notice sent to the outbound webhook.

use cardforge_core::types::DbId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event name for a card promoted from the submission queue.
pub const EVENT_CARD_APPROVED: &str = "card.approved";

/// Event name for a card inserted directly by an admin.
pub const EVENT_CARD_CREATED: &str = "card.created";

/// A structured announcement of a new catalog card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardNotice {
    /// Dot-separated event name, e.g. `"card.approved"`.
    pub event_type: String,
    pub card_id: DbId,
    pub name: String,
    pub form: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub image_url: String,
    pub timestamp: DateTime<Utc>,
}

impl CardNotice {
    pub fn new(
        event_type: impl Into<String>,
        card_id: DbId,
        name: impl Into<String>,
        form: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            card_id,
            name: name.into(),
            form: form.into(),
            series: None,
            event_name: None,
            image_url: image_url.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn with_series(mut self, series: Option<String>) -> Self {
        self.series = series;
        self
    }

    pub fn with_event_name(mut self, event_name: Option<String>) -> Self {
        self.event_name = event_name;
        self
    }

    /// One-line human summary, used as the webhook message text.
    pub fn summary(&self) -> String {
        let mut text = format!("New card: {} ({})", self.name, self.form);
        if let Some(series) = &self.series {
            text.push_str(&format!(" from {series}"));
        }
        if let Some(event) = &self.event_name {
            text.push_str(&format!(" [{event}]"));
        }
        text
    }
}
