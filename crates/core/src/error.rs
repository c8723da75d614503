use validator::ValidationErrors;

/// Message shared by every authorization failure so callers learn nothing
/// about which check rejected them.
pub const LOGIN_REQUIRED: &str = "Login required";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The uniform rejection for anonymous callers and role mismatches.
    pub fn login_required() -> Self {
        CoreError::Unauthorized(LOGIN_REQUIRED.to_string())
    }

    /// Collapse `validator` output into a single field error.
    ///
    /// `field_order` decides which field is reported when several fail, so the
    /// result does not depend on hash-map iteration order.
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let fields = errors.field_errors();
        for field in field_order {
            if let Some((_, errs)) = fields.iter().find(|(k, _)| k.to_string() == *field) {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                return CoreError::validation(*field, message);
            }
        }
        CoreError::validation("input", errors.to_string())
    }
}
