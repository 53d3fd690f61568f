use super::*;
use crate::net::types::Species;
use time::macros::date;

fn patient() -> Patient {
    Patient {
        id: "p1".to_owned(),
        name: "Rex".to_owned(),
        species: Species::Dog,
        breed: "Beagle".to_owned(),
        sex: Sex::Male,
        birth_date: Some("2020-01-10".to_owned()),
        weight_kg: None,
        neutered: false,
        tutor_name: "Ana".to_owned(),
        tutor_phone: String::new(),
        conditions: vec![],
        notes: None,
    }
}

#[test]
fn species_line_joins_present_parts() {
    assert_eq!(species_line(&patient()), "Dog · Beagle · Male");
    let mixed = Patient { breed: "  ".to_owned(), species: Species::Cat, sex: Sex::Female, ..patient() };
    assert_eq!(species_line(&mixed), "Cat · Female");
    let unsure = Patient { sex: Sex::Unknown, ..patient() };
    assert_eq!(species_line(&unsure), "Dog · Beagle");
}

#[test]
fn age_text_uses_birth_date() {
    assert_eq!(age_text(&patient(), date!(2024 - 06 - 15)), "4 years");
}

#[test]
fn age_text_falls_back_without_birth_date() {
    let unknown = Patient { birth_date: None, ..patient() };
    assert_eq!(age_text(&unknown, date!(2024 - 06 - 15)), "Age unknown");
    let garbled = Patient { birth_date: Some("soon".to_owned()), ..patient() };
    assert_eq!(age_text(&garbled, date!(2024 - 06 - 15)), "Age unknown");
}
