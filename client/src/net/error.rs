//! Error type shared by every backend call.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, rejected requests and undecodable bodies stay distinct so
//! callers can special-case field errors (e.g. a duplicate email) and map the
//! rest to a visible error state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use super::types::{ErrorBody, FieldError};

/// Field-level code the backend uses for unique-constraint violations.
pub const NOT_UNIQUE: &str = "validation_not_unique";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String, fields: BTreeMap<String, FieldError> },
    #[error("record not found")]
    NotFound,
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("backend not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a decoded error body.
    #[must_use]
    pub fn from_body(status: u16, body: ErrorBody) -> Self {
        if status == 404 {
            return Self::NotFound;
        }
        let message = if body.message.is_empty() { format!("HTTP {status}") } else { body.message };
        Self::Status { status, message, fields: body.data }
    }

    /// Returns the validation code the backend attached to `field`, if any.
    #[must_use]
    pub fn field_code(&self, field: &str) -> Option<&str> {
        match self {
            Self::Status { fields, .. } => fields.get(field).map(|f| f.code.as_str()),
            _ => None,
        }
    }

    /// True when the backend rejected `field` as a duplicate value.
    #[must_use]
    pub fn is_not_unique(&self, field: &str) -> bool {
        self.field_code(field) == Some(NOT_UNIQUE)
    }
}
