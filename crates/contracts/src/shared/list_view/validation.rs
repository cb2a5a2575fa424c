//! Client-side checks run before a create/update reaches the server

use serde_json::Value;
use thiserror::Error;

use super::record::Record;

/// A field that must be filled in before submitting a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub field: &'static str,
    pub label: &'static str,
}

impl RequiredField {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Le champ « {label} » est obligatoire")]
    MissingField { field: String, label: String },
}

fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// Check required fields in declaration order; the first gap is reported
pub fn validate_required(payload: &Record, required: &[RequiredField]) -> Result<(), ValidationError> {
    match required.iter().find(|r| !is_filled(payload.lookup(r.field))) {
        Some(missing) => Err(ValidationError::MissingField {
            field: missing.field.to_string(),
            label: missing.label.to_string(),
        }),
        None => Ok(()),
    }
}
