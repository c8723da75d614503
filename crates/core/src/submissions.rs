//! Submission queue statuses, review decisions, and submission validation.
//!
//! A submission is `pending` until an admin decides it. Both decisions remove
//! the row; approval additionally promotes it into the card catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::cards::{known_form, not_blank, CardForm};
use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// `card_queue.action` written when a submission is promoted into a card.
pub const QUEUE_ACTION_CREATED: &str = "created";

/// `card_queue.status` of a freshly appended change-log entry.
pub const QUEUE_STATUS_PENDING: &str = "pending";

/// An admin's disposition of a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Approved => STATUS_APPROVED,
            Decision::Rejected => STATUS_REJECTED,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            STATUS_APPROVED => Ok(Decision::Approved),
            STATUS_REJECTED => Ok(Decision::Rejected),
            other => Err(CoreError::validation(
                "action",
                format!("invalid action '{other}'. Must be one of: {STATUS_APPROVED}, {STATUS_REJECTED}"),
            )),
        }
    }
}

/// Fields a card maker supplies when proposing a card.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmissionDraft {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "known_form"))]
    pub form_type: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub image_url: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
}

impl SubmissionDraft {
    const FIELD_ORDER: &'static [&'static str] = &["title", "form_type", "image_url"];

    /// Validate and return the parsed form.
    pub fn check(&self) -> Result<CardForm, CoreError> {
        self.validate()
            .map_err(|e| CoreError::from_validation(&e, Self::FIELD_ORDER))?;
        self.form_type
            .parse()
            .map_err(|_| CoreError::validation("form_type", "is not a known form"))
    }
}

/// Trim an optional text field, treating blank as absent.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
