//! Exam, hospitalization, vaccine and surgery forms.
//!
//! Two forms have a checkbox that disables a date input:
//! - hospitalization: `still_admitted` disables `discharged_on`
//! - vaccine: `single_dose` disables `next_dose_on`
//!
//! While disabled, the date is ignored and sent as `null`. While enabled it
//! is required and must not precede the primary date.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use time::Date;

use super::{FormErrors, RecordForm, optional, past_date, required, required_date};
use crate::net::types::{
    Exam, ExamPayload, Hospitalization, HospitalizationPayload, Surgery, SurgeryPayload, Vaccine, VaccinePayload,
};
use crate::util::dates::to_iso;

pub const DISCHARGE_BEFORE_ADMISSION: &str = "Discharge cannot precede admission";
pub const NEXT_DOSE_NOT_AFTER: &str = "Next dose must be after the application date";

// =============================================================================
// EXAM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExamForm {
    pub name: String,
    pub performed_on: String,
    pub veterinarian: String,
    pub result: String,
    pub notes: String,
}

impl RecordForm for ExamForm {
    type Record = Exam;

    fn from_record(exam: &Exam) -> Self {
        Self {
            name: exam.name.clone(),
            performed_on: exam.performed_on.clone(),
            veterinarian: exam.veterinarian.clone(),
            result: exam.result.clone().unwrap_or_default(),
            notes: exam.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, today: Date) -> Result<ExamPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let performed_on = past_date(&mut errors, "performed_on", &self.performed_on, today);
        let veterinarian = required(&mut errors, "veterinarian", &self.veterinarian);
        errors.finish(|| ExamPayload {
            name,
            performed_on: performed_on.map(to_iso).unwrap_or_default(),
            veterinarian,
            result: optional(&self.result),
            notes: optional(&self.notes),
        })
    }
}

// =============================================================================
// HOSPITALIZATION
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HospitalizationForm {
    pub admitted_on: String,
    pub still_admitted: bool,
    pub discharged_on: String,
    pub reason: String,
    pub notes: String,
}

impl HospitalizationForm {
    #[must_use]
    pub fn discharge_disabled(&self) -> bool {
        self.still_admitted
    }
}

impl RecordForm for HospitalizationForm {
    type Record = Hospitalization;

    fn from_record(stay: &Hospitalization) -> Self {
        Self {
            admitted_on: stay.admitted_on.clone(),
            still_admitted: stay.discharged_on.is_none(),
            discharged_on: stay.discharged_on.clone().unwrap_or_default(),
            reason: stay.reason.clone(),
            notes: stay.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, today: Date) -> Result<HospitalizationPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let admitted_on = past_date(&mut errors, "admitted_on", &self.admitted_on, today);
        let discharged_on = if self.still_admitted {
            None
        } else {
            let discharged = past_date(&mut errors, "discharged_on", &self.discharged_on, today);
            if let (Some(admitted), Some(discharged)) = (admitted_on, discharged) {
                if discharged < admitted {
                    errors.add("discharged_on", DISCHARGE_BEFORE_ADMISSION);
                }
            }
            discharged
        };
        let reason = required(&mut errors, "reason", &self.reason);
        errors.finish(|| HospitalizationPayload {
            admitted_on: admitted_on.map(to_iso).unwrap_or_default(),
            discharged_on: discharged_on.map(to_iso),
            reason,
            notes: optional(&self.notes),
        })
    }
}

// =============================================================================
// VACCINE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VaccineForm {
    pub name: String,
    pub applied_on: String,
    pub single_dose: bool,
    pub next_dose_on: String,
    pub batch: String,
}

impl VaccineForm {
    #[must_use]
    pub fn next_dose_disabled(&self) -> bool {
        self.single_dose
    }
}

impl RecordForm for VaccineForm {
    type Record = Vaccine;

    fn from_record(vaccine: &Vaccine) -> Self {
        Self {
            name: vaccine.name.clone(),
            applied_on: vaccine.applied_on.clone(),
            single_dose: vaccine.next_dose_on.is_none(),
            next_dose_on: vaccine.next_dose_on.clone().unwrap_or_default(),
            batch: vaccine.batch.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, today: Date) -> Result<VaccinePayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let applied_on = past_date(&mut errors, "applied_on", &self.applied_on, today);
        // The next dose is scheduled, so it may lie in the future.
        let next_dose_on = if self.single_dose {
            None
        } else {
            let next = required_date(&mut errors, "next_dose_on", &self.next_dose_on);
            if let (Some(applied), Some(next)) = (applied_on, next) {
                if next <= applied {
                    errors.add("next_dose_on", NEXT_DOSE_NOT_AFTER);
                }
            }
            next
        };
        errors.finish(|| VaccinePayload {
            name,
            applied_on: applied_on.map(to_iso).unwrap_or_default(),
            next_dose_on: next_dose_on.map(to_iso),
            batch: optional(&self.batch),
        })
    }
}

// =============================================================================
// SURGERY
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurgeryForm {
    pub name: String,
    pub performed_on: String,
    pub surgeon: String,
    pub anesthesia: String,
    pub notes: String,
}

impl RecordForm for SurgeryForm {
    type Record = Surgery;

    fn from_record(surgery: &Surgery) -> Self {
        Self {
            name: surgery.name.clone(),
            performed_on: surgery.performed_on.clone(),
            surgeon: surgery.surgeon.clone(),
            anesthesia: surgery.anesthesia.clone().unwrap_or_default(),
            notes: surgery.notes.clone().unwrap_or_default(),
        }
    }

    fn validate(&self, today: Date) -> Result<SurgeryPayload, FormErrors> {
        let mut errors = FormErrors::default();
        let name = required(&mut errors, "name", &self.name);
        let performed_on = past_date(&mut errors, "performed_on", &self.performed_on, today);
        let surgeon = required(&mut errors, "surgeon", &self.surgeon);
        errors.finish(|| SurgeryPayload {
            name,
            performed_on: performed_on.map(to_iso).unwrap_or_default(),
            surgeon,
            anesthesia: optional(&self.anesthesia),
            notes: optional(&self.notes),
        })
    }
}
