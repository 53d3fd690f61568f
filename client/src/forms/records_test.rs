use super::*;
use crate::forms::{FUTURE_DATE, INVALID_DATE, REQUIRED};
use time::macros::date;

const TODAY: Date = date!(2024 - 06 - 15);

// =============================================================
// Exam
// =============================================================

#[test]
fn exam_requires_name_date_and_vet() {
    let errors = ExamForm::default().validate(TODAY).unwrap_err();
    assert_eq!(errors.get("name"), Some(REQUIRED));
    assert_eq!(errors.get("performed_on"), Some(REQUIRED));
    assert_eq!(errors.get("veterinarian"), Some(REQUIRED));
}

#[test]
fn exam_payload_keeps_optional_text() {
    let form = ExamForm {
        name: "Blood count".to_owned(),
        performed_on: "2024-06-01".to_owned(),
        veterinarian: "Dr. Lima".to_owned(),
        result: "Normal".to_owned(),
        notes: " ".to_owned(),
    };
    let payload = form.validate(TODAY).unwrap();
    assert_eq!(payload.performed_on, "2024-06-01");
    assert_eq!(payload.result.as_deref(), Some("Normal"));
    assert_eq!(payload.notes, None);
}

#[test]
fn exam_from_record_round_trips() {
    let exam = Exam {
        id: "e1".to_owned(),
        patient_id: "p1".to_owned(),
        name: "X-ray".to_owned(),
        performed_on: "2024-01-20".to_owned(),
        veterinarian: "Dr. Lima".to_owned(),
        result: None,
        notes: Some("Left leg".to_owned()),
    };
    let payload = ExamForm::from_record(&exam).validate(TODAY).unwrap();
    assert_eq!(payload.name, "X-ray");
    assert_eq!(payload.notes.as_deref(), Some("Left leg"));
}

// =============================================================
// Hospitalization
// =============================================================

fn stay_form() -> HospitalizationForm {
    HospitalizationForm {
        admitted_on: "2024-06-10".to_owned(),
        discharged_on: "2024-06-12".to_owned(),
        reason: "Gastroenteritis".to_owned(),
        ..HospitalizationForm::default()
    }
}

#[test]
fn still_admitted_disables_discharge() {
    let form = HospitalizationForm { still_admitted: true, discharged_on: "nonsense".to_owned(), ..stay_form() };
    assert!(form.discharge_disabled());
    assert_eq!(form.validate(TODAY).unwrap().discharged_on, None);
}

#[test]
fn discharge_required_when_enabled() {
    let form = HospitalizationForm { discharged_on: String::new(), ..stay_form() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("discharged_on"), Some(REQUIRED));
}

#[test]
fn discharge_cannot_precede_admission() {
    let form = HospitalizationForm { discharged_on: "2024-06-09".to_owned(), ..stay_form() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("discharged_on"), Some(DISCHARGE_BEFORE_ADMISSION));
}

#[test]
fn same_day_discharge_is_valid() {
    let form = HospitalizationForm { discharged_on: "2024-06-10".to_owned(), ..stay_form() };
    assert_eq!(form.validate(TODAY).unwrap().discharged_on.as_deref(), Some("2024-06-10"));
}

#[test]
fn open_stay_from_record_checks_still_admitted() {
    let stay = Hospitalization {
        id: "h1".to_owned(),
        patient_id: "p1".to_owned(),
        admitted_on: "2024-06-14".to_owned(),
        discharged_on: None,
        reason: "Observation".to_owned(),
        notes: None,
    };
    let form = HospitalizationForm::from_record(&stay);
    assert!(form.still_admitted);
    assert!(form.validate(TODAY).is_ok());
}

// =============================================================
// Vaccine
// =============================================================

fn vaccine_form() -> VaccineForm {
    VaccineForm {
        name: "Rabies".to_owned(),
        applied_on: "2024-06-01".to_owned(),
        next_dose_on: "2025-06-01".to_owned(),
        ..VaccineForm::default()
    }
}

#[test]
fn next_dose_may_be_in_the_future() {
    let payload = vaccine_form().validate(TODAY).unwrap();
    assert_eq!(payload.next_dose_on.as_deref(), Some("2025-06-01"));
    assert_eq!(payload.batch, None);
}

#[test]
fn single_dose_disables_next_dose() {
    let form = VaccineForm { single_dose: true, next_dose_on: String::new(), ..vaccine_form() };
    assert!(form.next_dose_disabled());
    assert_eq!(form.validate(TODAY).unwrap().next_dose_on, None);
}

#[test]
fn next_dose_must_follow_application() {
    let form = VaccineForm { next_dose_on: "2024-06-01".to_owned(), ..vaccine_form() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("next_dose_on"), Some(NEXT_DOSE_NOT_AFTER));
}

#[test]
fn application_date_cannot_be_future() {
    let form = VaccineForm { applied_on: "2024-07-01".to_owned(), ..vaccine_form() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("applied_on"), Some(FUTURE_DATE));
}

// =============================================================
// Surgery
// =============================================================

#[test]
fn surgery_rejects_invalid_date() {
    let form = SurgeryForm {
        name: "Castration".to_owned(),
        performed_on: "2024-13-01".to_owned(),
        surgeon: "Dr. Reis".to_owned(),
        ..SurgeryForm::default()
    };
    assert_eq!(form.validate(TODAY).unwrap_err().get("performed_on"), Some(INVALID_DATE));
}

#[test]
fn surgery_payload() {
    let form = SurgeryForm {
        name: "Castration".to_owned(),
        performed_on: "2024-05-30".to_owned(),
        surgeon: "Dr. Reis".to_owned(),
        anesthesia: "Isoflurane".to_owned(),
        notes: String::new(),
    };
    let payload = form.validate(TODAY).unwrap();
    assert_eq!(payload.anesthesia.as_deref(), Some("Isoflurane"));
    assert_eq!(payload.notes, None);
}
