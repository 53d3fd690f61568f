//! Form state and validation.
//!
//! DESIGN
//! ======
//! Each form struct holds the raw values of its controlled inputs (strings
//! and checkbox bools). `validate` turns those into a wire payload or a
//! `FormErrors` map keyed by field name, so modals can render one message
//! under each input. Required text is trimmed before checking.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod account;
pub mod patient;
pub mod records;

use std::collections::BTreeMap;

use time::Date;

use crate::net::types::PatientRecord;
use crate::util::dates::parse_iso;

pub const REQUIRED: &str = "Required field";
pub const INVALID_DATE: &str = "Invalid date";
pub const FUTURE_DATE: &str = "Date cannot be in the future";

/// Per-field validation messages. The first message for a field wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(build())` when no errors were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when any field failed.
    pub fn finish<T>(self, build: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(build()) } else { Err(self) }
    }
}

/// A form that edits one kind of patient record.
pub trait RecordForm: Default + Clone + Send + Sync + 'static {
    type Record: PatientRecord;

    fn from_record(record: &Self::Record) -> Self;

    /// # Errors
    ///
    /// Returns the per-field messages when any input is invalid.
    fn validate(&self, today: Date) -> Result<<Self::Record as PatientRecord>::Payload, FormErrors>;
}

/// Trimmed value, or a `REQUIRED` error when blank.
pub(crate) fn required(errors: &mut FormErrors, field: &'static str, raw: &str) -> String {
    let value = raw.trim();
    if value.is_empty() {
        errors.add(field, REQUIRED);
    }
    value.to_owned()
}

/// Trimmed value, or `None` when blank.
pub(crate) fn optional(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Parse a required ISO date from a date input.
pub(crate) fn required_date(errors: &mut FormErrors, field: &'static str, raw: &str) -> Option<Date> {
    if raw.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    let parsed = parse_iso(raw);
    if parsed.is_none() {
        errors.add(field, INVALID_DATE);
    }
    parsed
}

/// Required date that may not be after `today`.
pub(crate) fn past_date(errors: &mut FormErrors, field: &'static str, raw: &str, today: Date) -> Option<Date> {
    let date = required_date(errors, field, raw)?;
    if date > today {
        errors.add(field, FUTURE_DATE);
    }
    Some(date)
}
