//! The validate-and-map-errors routine

use super::constraint::{registration_rules, DATE_FORMAT};
use super::fields::{FieldId, Registration, RegistrationValues};
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;

/// A single violated constraint: which field, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a full value bag against the registration schema.
///
/// Walks the fields in declaration order; within a field the first
/// violated constraint wins and the rest are not evaluated, so each
/// field appears at most once in the failure list. Pure function of its
/// input — no side effects, idempotent.
///
/// On success the returned [`Registration`] carries the normalized
/// values (trimmed where the schema says so, date of birth parsed).
pub fn validate(values: &RegistrationValues) -> Result<Registration, Vec<FieldError>> {
    let rules = registration_rules();

    let mut failures = Vec::new();
    for field_rules in &rules {
        let Some(raw) = values.text(field_rules.field) else {
            continue;
        };
        for constraint in &field_rules.constraints {
            if let Some(message) = constraint.check(raw) {
                failures.push(FieldError::new(field_rules.field, message));
                break;
            }
        }
    }
    if !failures.is_empty() {
        return Err(failures);
    }

    let mut normalized = values.clone();
    for field_rules in &rules {
        if field_rules.trim_output {
            if let Some(text) = normalized.text_mut(field_rules.field) {
                *text = text.trim().to_string();
            }
        }
    }

    // The date constraint already parsed this; re-parsing keeps the
    // walker free of per-field special cases.
    let date_of_birth = NaiveDate::parse_from_str(&normalized.date_of_birth, DATE_FORMAT)
        .map_err(|_| vec![FieldError::new(FieldId::DateOfBirth, "Invalid date")])?;

    Ok(Registration {
        name: normalized.name,
        email: normalized.email,
        phone: normalized.phone,
        address: normalized.address,
        date_of_birth,
        password: normalized.password,
        subscribe: normalized.subscribe,
    })
}

/// Collapse an ordered failure list into one message per field.
///
/// The first message for a field wins; fields absent from the list are
/// absent from the map.
pub fn error_map(failures: &[FieldError]) -> HashMap<FieldId, String> {
    let mut map = HashMap::new();
    for failure in failures {
        map.entry(failure.field)
            .or_insert_with(|| failure.message.clone());
    }
    map
}
