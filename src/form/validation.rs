//! Per-field validation rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::FieldName;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldErrorKind {
    Required,
    Format,
}

/// Inline error shown next to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: FieldName,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn required(field: FieldName) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
            message: format!("{} is required", field.label()),
        }
    }

    pub fn invalid_email() -> Self {
        Self {
            field: FieldName::Email,
            kind: FieldErrorKind::Format,
            message: INVALID_EMAIL_MESSAGE.to_string(),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check one field's raw value. Presence is judged on the trimmed value.
pub fn check_field(field: FieldName, raw: &str) -> Option<FieldError> {
    let value = raw.trim();

    if field.is_required() && value.is_empty() {
        return Some(FieldError::required(field));
    }

    if field == FieldName::Email && !value.is_empty() && !is_valid_email(value) {
        return Some(FieldError::invalid_email());
    }

    None
}
