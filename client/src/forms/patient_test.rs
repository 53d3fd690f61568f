use super::*;
use crate::forms::{FUTURE_DATE, REQUIRED};
use time::macros::date;

const TODAY: Date = date!(2024 - 06 - 15);

fn filled() -> PatientForm {
    PatientForm {
        name: "Rex".to_owned(),
        species: Species::Dog,
        breed: " Beagle ".to_owned(),
        sex: Sex::Male,
        birth_date: "2019-04-02".to_owned(),
        weight_kg: "12,5".to_owned(),
        tutor_name: "Ana Souza".to_owned(),
        tutor_phone: "(11) 99999-0000".to_owned(),
        conditions: vec!["Otitis".to_owned()],
        ..PatientForm::default()
    }
}

#[test]
fn filled_form_produces_payload() {
    let payload = filled().validate(TODAY).unwrap();
    assert_eq!(payload.name, "Rex");
    assert_eq!(payload.breed, "Beagle");
    assert_eq!(payload.birth_date.as_deref(), Some("2019-04-02"));
    assert_eq!(payload.weight_kg, Some(12.5));
    assert_eq!(payload.conditions, vec!["Otitis".to_owned()]);
    assert_eq!(payload.notes, None);
}

#[test]
fn empty_form_flags_required_fields() {
    let errors = PatientForm::default().validate(TODAY).unwrap_err();
    assert_eq!(errors.get("name"), Some(REQUIRED));
    assert_eq!(errors.get("tutor_name"), Some(REQUIRED));
    assert_eq!(errors.get("tutor_phone"), Some(REQUIRED));
    assert_eq!(errors.get("birth_date"), Some(REQUIRED));
    assert!(!errors.has("weight_kg"));
}

#[test]
fn unknown_birth_date_disables_and_ignores_input() {
    let form = PatientForm { birth_date_unknown: true, birth_date: "garbage".to_owned(), ..filled() };
    assert!(form.birth_date_disabled());
    assert_eq!(form.validate(TODAY).unwrap().birth_date, None);
}

#[test]
fn future_birth_date_is_rejected() {
    let form = PatientForm { birth_date: "2024-06-16".to_owned(), ..filled() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("birth_date"), Some(FUTURE_DATE));
}

#[test]
fn short_phone_is_rejected() {
    let form = PatientForm { tutor_phone: "99-00".to_owned(), ..filled() };
    assert_eq!(form.validate(TODAY).unwrap_err().get("tutor_phone"), Some(INVALID_PHONE));
}

#[test]
fn parse_weight_cases() {
    assert_eq!(parse_weight(""), Ok(None));
    assert_eq!(parse_weight("4.25"), Ok(Some(4.25)));
    assert_eq!(parse_weight("0"), Err(()));
    assert_eq!(parse_weight("-2"), Err(()));
    assert_eq!(parse_weight("heavy"), Err(()));
}

#[test]
fn format_weight_trims_trailing_zeros() {
    assert_eq!(format_weight(12.0), "12");
    assert_eq!(format_weight(12.5), "12.5");
    assert_eq!(format_weight(7.456), "7.46");
}

#[test]
fn from_patient_round_trips_to_same_payload() {
    let patient = Patient {
        id: "p1".to_owned(),
        name: "Mia".to_owned(),
        species: Species::Cat,
        breed: String::new(),
        sex: Sex::Female,
        birth_date: None,
        weight_kg: Some(4.0),
        neutered: true,
        tutor_name: "João".to_owned(),
        tutor_phone: "11 3333-4444".to_owned(),
        conditions: vec![],
        notes: Some("Shy".to_owned()),
    };
    let form = PatientForm::from_patient(&patient);
    assert!(form.birth_date_unknown);
    assert_eq!(form.weight_kg, "4");

    let payload = form.validate(TODAY).unwrap();
    assert_eq!(payload.birth_date, None);
    assert_eq!(payload.weight_kg, Some(4.0));
    assert_eq!(payload.notes.as_deref(), Some("Shy"));
    assert!(payload.neutered);
}
