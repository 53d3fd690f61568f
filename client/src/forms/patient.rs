//! Patient create/edit form.
//!
//! The birth date input is disabled while `birth_date_unknown` is checked;
//! in that state whatever the input still holds is ignored and the payload
//! carries no birth date.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use time::Date;

use super::{FormErrors, optional, past_date, required};
use crate::net::types::{Patient, PatientPayload, Sex, Species};
use crate::util::dates::to_iso;

pub const MIN_PHONE_DIGITS: usize = 8;
pub const INVALID_WEIGHT: &str = "Enter a positive weight in kg";
pub const INVALID_PHONE: &str = "Enter a phone number with area code";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientForm {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub birth_date: String,
    pub birth_date_unknown: bool,
    pub weight_kg: String,
    pub neutered: bool,
    pub tutor_name: String,
    pub tutor_phone: String,
    pub conditions: Vec<String>,
    pub notes: String,
}

impl PatientForm {
    #[must_use]
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            species: patient.species,
            breed: patient.breed.clone(),
            sex: patient.sex,
            birth_date: patient.birth_date.clone().unwrap_or_default(),
            birth_date_unknown: patient.birth_date.is_none(),
            weight_kg: patient.weight_kg.map(format_weight).unwrap_or_default(),
            neutered: patient.neutered,
            tutor_name: patient.tutor_name.clone(),
            tutor_phone: patient.tutor_phone.clone(),
            conditions: patient.conditions.clone(),
            notes: patient.notes.clone().unwrap_or_default(),
        }
    }

    /// Whether the birth date input should render disabled.
    #[must_use]
    pub fn birth_date_disabled(&self) -> bool {
        self.birth_date_unknown
    }

    /// # Errors
    ///
    /// Returns per-field messages for missing required fields, a future birth
    /// date, a non-positive weight, or a too-short phone number.
    pub fn validate(&self, today: Date) -> Result<PatientPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let tutor_name = required(&mut errors, "tutor_name", &self.tutor_name);
        let tutor_phone = required(&mut errors, "tutor_phone", &self.tutor_phone);
        if !tutor_phone.is_empty() && phone_digits(&tutor_phone) < MIN_PHONE_DIGITS {
            errors.add("tutor_phone", INVALID_PHONE);
        }

        let birth_date = if self.birth_date_unknown {
            None
        } else {
            past_date(&mut errors, "birth_date", &self.birth_date, today).map(to_iso)
        };

        let weight_kg = match parse_weight(&self.weight_kg) {
            Ok(weight) => weight,
            Err(()) => {
                errors.add("weight_kg", INVALID_WEIGHT);
                None
            }
        };

        errors.finish(|| PatientPayload {
            name,
            species: self.species,
            breed: self.breed.trim().to_owned(),
            sex: self.sex,
            birth_date,
            weight_kg,
            neutered: self.neutered,
            tutor_name,
            tutor_phone,
            conditions: self.conditions.clone(),
            notes: optional(&self.notes),
        })
    }
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// Blank is `Ok(None)`. Accepts `,` as decimal separator.
pub(crate) fn parse_weight(raw: &str) -> Result<Option<f64>, ()> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.replace(',', ".").parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(Some(weight)),
        _ => Err(()),
    }
}

/// Weight as shown in the input: no trailing `.0` for whole kilograms.
pub(crate) fn format_weight(weight: f64) -> String {
    let formatted = format!("{weight:.2}");
    formatted.trim_end_matches('0').trim_end_matches('.').to_owned()
}
