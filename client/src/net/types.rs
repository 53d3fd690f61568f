//! Shared wire DTOs for the records API.
//!
//! DESIGN
//! ======
//! Entities mirror the JSON the records API returns. Dates travel as ISO
//! `YYYY-MM-DD` strings and are only parsed at the edges (`util::dates`) so
//! an unexpected format from the server never fails a whole listing.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Animal species tracked by the clinic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Bird,
    Rodent,
    Reptile,
    Other,
}

impl Species {
    pub const ALL: [Self; 6] = [Self::Dog, Self::Cat, Self::Bird, Self::Rodent, Self::Reptile, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Rodent => "Rodent",
            Self::Reptile => "Reptile",
            Self::Other => "Other",
        }
    }

    /// Wire value, also used as the `<option>` value in filters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Rodent => "rodent",
            Self::Reptile => "reptile",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Biological sex of a patient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Sex {
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unknown];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A patient (animal) record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub species: Species,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub sex: Sex,
    pub birth_date: Option<String>,
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub neutered: bool,
    pub tutor_name: String,
    #[serde(default)]
    pub tutor_phone: String,
    /// Chronic conditions and allergies, entered as free-form tags.
    #[serde(default)]
    pub conditions: Vec<String>,
    pub notes: Option<String>,
}

/// A laboratory or clinical exam.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub performed_on: String,
    #[serde(default)]
    pub veterinarian: String,
    pub result: Option<String>,
    pub notes: Option<String>,
}

/// An admission period. `discharged_on` is `None` while the patient is still admitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hospitalization {
    pub id: String,
    pub patient_id: String,
    pub admitted_on: String,
    pub discharged_on: Option<String>,
    pub reason: String,
    pub notes: Option<String>,
}

/// A vaccine application. `next_dose_on` is `None` for single-dose vaccines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vaccine {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub applied_on: String,
    pub next_dose_on: Option<String>,
    pub batch: Option<String>,
}

/// A surgical procedure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Surgery {
    pub id: String,
    pub patient_id: String,
    pub name: String,
    pub performed_on: String,
    #[serde(default)]
    pub surgeon: String,
    pub anesthesia: Option<String>,
    pub notes: Option<String>,
}

/// A clinic staff account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Veterinary licence number, when the user is a vet.
    pub crmv: Option<String>,
    pub phone: Option<String>,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Response body of `POST /api/sessions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: User,
}

// =============================================================================
// PAYLOADS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub crmv: Option<String>,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub name: String,
    pub email: String,
    pub crmv: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PasswordPayload {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatientPayload {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub sex: Sex,
    pub birth_date: Option<String>,
    pub weight_kg: Option<f64>,
    pub neutered: bool,
    pub tutor_name: String,
    pub tutor_phone: String,
    pub conditions: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExamPayload {
    pub name: String,
    pub performed_on: String,
    pub veterinarian: String,
    pub result: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HospitalizationPayload {
    pub admitted_on: String,
    pub discharged_on: Option<String>,
    pub reason: String,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VaccinePayload {
    pub name: String,
    pub applied_on: String,
    pub next_dose_on: Option<String>,
    pub batch: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SurgeryPayload {
    pub name: String,
    pub performed_on: String,
    pub surgeon: String,
    pub anesthesia: Option<String>,
    pub notes: Option<String>,
}

// =============================================================================
// PATIENT RECORDS
// =============================================================================

/// The four record collections nested under a patient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecordKind {
    #[default]
    Exam,
    Hospitalization,
    Vaccine,
    Surgery,
}

impl RecordKind {
    pub const ALL: [Self; 4] = [Self::Exam, Self::Hospitalization, Self::Vaccine, Self::Surgery];

    /// URL segment under `/api/patients/{id}/`.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Exam => "exams",
            Self::Hospitalization => "hospitalizations",
            Self::Vaccine => "vaccines",
            Self::Surgery => "surgeries",
        }
    }

    /// Singular lowercase noun ("exam"), used in modal titles and toasts.
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Exam => "exam",
            Self::Hospitalization => "hospitalization",
            Self::Vaccine => "vaccine",
            Self::Surgery => "surgery",
        }
    }

    /// Tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Exam => "Exams",
            Self::Hospitalization => "Hospitalizations",
            Self::Vaccine => "Vaccines",
            Self::Surgery => "Surgeries",
        }
    }
}

/// A record that lives in one of the per-patient collections.
pub trait PatientRecord: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: RecordKind;
    type Payload: Serialize + Clone + Send + Sync + 'static;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    /// Primary ISO date used for ordering, newest first.
    fn date(&self) -> &str;
}

impl PatientRecord for Exam {
    const KIND: RecordKind = RecordKind::Exam;
    type Payload = ExamPayload;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn date(&self) -> &str {
        &self.performed_on
    }
}

impl PatientRecord for Hospitalization {
    const KIND: RecordKind = RecordKind::Hospitalization;
    type Payload = HospitalizationPayload;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.reason
    }
    fn date(&self) -> &str {
        &self.admitted_on
    }
}

impl PatientRecord for Vaccine {
    const KIND: RecordKind = RecordKind::Vaccine;
    type Payload = VaccinePayload;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn date(&self) -> &str {
        &self.applied_on
    }
}

impl PatientRecord for Surgery {
    const KIND: RecordKind = RecordKind::Surgery;
    type Payload = SurgeryPayload;

    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.name
    }
    fn date(&self) -> &str {
        &self.performed_on
    }
}

/// Sort records newest first. ISO dates order lexicographically; ties keep
/// server order.
pub fn sort_newest_first<R: PatientRecord>(records: &mut [R]) {
    records.sort_by(|a, b| b.date().cmp(a.date()));
}
