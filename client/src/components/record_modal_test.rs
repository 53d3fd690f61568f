use super::*;
use crate::forms::records::{HospitalizationForm, VaccineForm};
use crate::net::types::Vaccine;

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize("hospitalization"), "Hospitalization");
    assert_eq!(capitalize(""), "");
}

#[test]
fn new_blank_form_is_stamped_with_today() {
    let owner = Owner::new();
    owner.set();

    let state = RecordModalState::<HospitalizationForm>::new(None, |f, today| f.admitted_on = today);
    let form = state.form.get_untracked();
    assert_eq!(form.admitted_on, to_iso(today()));
    assert!(form.discharged_on.is_empty());
    assert!(state.errors.get_untracked().is_empty());
}

#[test]
fn editing_prefills_without_stamp() {
    let owner = Owner::new();
    owner.set();

    let vaccine = Vaccine {
        id: "v1".to_owned(),
        patient_id: "p1".to_owned(),
        name: "Rabies".to_owned(),
        applied_on: "2023-03-01".to_owned(),
        next_dose_on: Some("2024-03-01".to_owned()),
        batch: None,
    };
    let state = RecordModalState::<VaccineForm>::new(Some(&vaccine), |f, today| f.applied_on = today);
    let form = state.form.get_untracked();
    assert_eq!(form.applied_on, "2023-03-01");
    assert!(!form.single_dose);
}
