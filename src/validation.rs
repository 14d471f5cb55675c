//! Correction and justification requests, each with a pure validator.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;
const MIN_REASON_CHARS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Asks management to move an existing punch to a new date and time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectionForm {
    #[serde(default)]
    pub record_id: String,
    #[serde(default)]
    pub new_date: String,
    #[serde(default)]
    pub new_time: String,
    #[serde(default)]
    pub reason: String,
}

impl CorrectionForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.record_id.trim().is_empty() {
            errors.push(FieldError::new("record_id", "Select a record."));
        }
        check_date(&mut errors, "new_date", &self.new_date, "Enter the new date.");
        check_time(&mut errors, "new_time", &self.new_time, "Enter the new time.");
        if self.reason.chars().count() < MIN_REASON_CHARS {
            errors.push(FieldError::new("reason", "Explain the reason."));
        }
        errors
    }
}

/// Justifies an absence, optionally with a supporting document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JustificationForm {
    #[serde(default)]
    pub absence_date: String,
    #[serde(default)]
    pub reason: String,
    pub attachment_name: Option<String>,
    pub attachment_size: Option<u64>,
}

impl JustificationForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        check_date(
            &mut errors,
            "absence_date",
            &self.absence_date,
            "Enter the date of the absence.",
        );
        if self.reason.chars().count() < MIN_REASON_CHARS {
            errors.push(FieldError::new(
                "reason",
                "Explain the reason in at least 10 characters.",
            ));
        }
        if self.attachment_size.is_some_and(|size| size > MAX_ATTACHMENT_BYTES) {
            errors.push(FieldError::new(
                "attachment",
                "The document must be at most 5MB.",
            ));
        }
        errors
    }
}

fn check_date(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    if NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_err() {
        errors.push(FieldError::new(field, message));
    }
}

fn check_time(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    if NaiveTime::parse_from_str(value.trim(), "%H:%M").is_err() {
        errors.push(FieldError::new(field, message));
    }
}
