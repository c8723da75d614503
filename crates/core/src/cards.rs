//! Card forms, catalog list filters, and card input validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;

pub const FORM_BASE: &str = "base";
pub const FORM_AWAKENED: &str = "awakened";
pub const FORM_EVENT: &str = "event";

/// Every valid form, in display order.
pub const VALID_FORMS: &[&str] = &[FORM_BASE, FORM_AWAKENED, FORM_EVENT];

/// Sentinel filter value meaning "no form restriction".
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardForm {
    Base,
    Awakened,
    Event,
}

impl CardForm {
    pub const ALL: [CardForm; 3] = [CardForm::Base, CardForm::Awakened, CardForm::Event];

    pub fn as_str(self) -> &'static str {
        match self {
            CardForm::Base => FORM_BASE,
            CardForm::Awakened => FORM_AWAKENED,
            CardForm::Event => FORM_EVENT,
        }
    }

    /// Capitalized label used when naming per-form variants.
    pub fn label(self) -> &'static str {
        match self {
            CardForm::Base => "Base",
            CardForm::Awakened => "Awakened",
            CardForm::Event => "Event",
        }
    }
}

impl fmt::Display for CardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardForm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            FORM_BASE => Ok(CardForm::Base),
            FORM_AWAKENED => Ok(CardForm::Awakened),
            FORM_EVENT => Ok(CardForm::Event),
            other => Err(CoreError::validation(
                "form",
                format!(
                    "unknown form '{other}'. Must be one of: {}",
                    VALID_FORMS.join(", ")
                ),
            )),
        }
    }
}

/// Parse the optional `form` list filter.
///
/// Absent, blank, or `all` means no restriction.
pub fn parse_form_filter(value: Option<&str>) -> Result<Option<CardForm>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(FILTER_ALL) => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Normalize the optional name search. Blank input means no search.
pub fn normalize_search(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Build an `ILIKE` pattern that matches `search` as a literal substring.
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for ch in search.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// Name given to one form of a card created through multi-form creation.
pub fn form_variant_name(name: &str, form: CardForm) -> String {
    format!("{} ({})", name.trim(), form.label())
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("is required".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn known_form(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if value.parse::<CardForm>().is_err() {
        let mut err = ValidationError::new("form");
        err.message = Some(format!("must be one of: {}", VALID_FORMS.join(", ")).into());
        return Err(err);
    }
    Ok(())
}

/// Fields an admin supplies when creating a catalog card directly.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CardDraft {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "known_form"))]
    pub form: String,
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub image_url: String,
    pub series: Option<String>,
    pub event_name: Option<String>,
    pub description: Option<String>,
}

impl CardDraft {
    const FIELD_ORDER: &'static [&'static str] = &["name", "form", "image_url"];

    /// Validate and return the parsed form.
    pub fn check(&self) -> Result<CardForm, CoreError> {
        self.validate()
            .map_err(|e| CoreError::from_validation(&e, Self::FIELD_ORDER))?;
        self.form.parse()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn draft() -> CardDraft {
        CardDraft {
            name: "Nyx".into(),
            form: "base".into(),
            image_url: "http://x/img.png".into(),
            series: None,
            event_name: None,
            description: None,
        }
    }

    #[test]
    fn form_parses_case_insensitively() {
        assert_eq!("Awakened".parse::<CardForm>().unwrap(), CardForm::Awakened);
        assert_eq!(" event ".parse::<CardForm>().unwrap(), CardForm::Event);
    }

    #[test]
    fn unknown_form_is_a_validation_error() {
        assert_matches!(
            "legendary".parse::<CardForm>(),
            Err(CoreError::Validation { ref field, .. }) if field == "form"
        );
    }

    #[test]
    fn all_sentinel_disables_filter() {
        assert_eq!(parse_form_filter(None).unwrap(), None);
        assert_eq!(parse_form_filter(Some("all")).unwrap(), None);
        assert_eq!(parse_form_filter(Some("ALL")).unwrap(), None);
        assert_eq!(parse_form_filter(Some("  ")).unwrap(), None);
        assert_eq!(parse_form_filter(Some("event")).unwrap(), Some(CardForm::Event));
        assert!(parse_form_filter(Some("shiny")).is_err());
    }

    #[test]
    fn blank_search_is_dropped() {
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some(" ny ")), Some("ny".to_string()));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("nyx"), "%nyx%");
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn variant_name_uses_label() {
        assert_eq!(form_variant_name(" Nyx ", CardForm::Awakened), "Nyx (Awakened)");
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(draft().check().unwrap(), CardForm::Base);
    }

    #[test]
    fn blank_name_reports_name() {
        let mut d = draft();
        d.name = "  ".into();
        d.image_url = String::new();
        assert_matches!(
            d.check(),
            Err(CoreError::Validation { ref field, .. }) if field == "name"
        );
    }

    #[test]
    fn bad_form_reports_form() {
        let mut d = draft();
        d.form = "rare".into();
        assert_matches!(
            d.check(),
            Err(CoreError::Validation { ref field, .. }) if field == "form"
        );
    }

    #[test]
    fn missing_image_reports_image_url() {
        let mut d = draft();
        d.image_url = " ".into();
        assert_matches!(
            d.check(),
            Err(CoreError::Validation { ref field, .. }) if field == "image_url"
        );
    }
}
