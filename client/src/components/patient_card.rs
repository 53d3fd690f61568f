//! Feed card for one patient.

#[cfg(test)]
#[path = "patient_card_test.rs"]
mod patient_card_test;

use leptos::prelude::*;
use time::Date;

use crate::net::types::{Patient, Sex};
use crate::util::dates::{age_label, parse_iso};

/// "Dog · Beagle · Male", skipping a blank breed and an unknown sex.
pub(crate) fn species_line(patient: &Patient) -> String {
    let mut parts = vec![patient.species.label()];
    let breed = patient.breed.trim();
    if !breed.is_empty() {
        parts.push(breed);
    }
    if patient.sex != Sex::Unknown {
        parts.push(patient.sex.label());
    }
    parts.join(" · ")
}

/// Age text for the card, or "Age unknown" without a usable birth date.
pub(crate) fn age_text(patient: &Patient, today: Date) -> String {
    patient
        .birth_date
        .as_deref()
        .and_then(parse_iso)
        .and_then(|birth| age_label(birth, today))
        .unwrap_or_else(|| "Age unknown".to_owned())
}

#[component]
pub fn PatientCard(patient: Patient, today: Date) -> impl IntoView {
    let href = format!("/patients/{}", patient.id);
    let subtitle = species_line(&patient);
    let age = age_text(&patient, today);
    let initial = patient.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let conditions = patient.conditions.clone();
    let has_conditions = !conditions.is_empty();

    view! {
        <a class="patient-card" href=href>
            <span class="patient-card__avatar" aria-hidden="true">{initial}</span>
            <span class="patient-card__body">
                <span class="patient-card__name">{patient.name}</span>
                <span class="patient-card__meta">{subtitle}</span>
                <span class="patient-card__meta">{age}</span>
                <span class="patient-card__tutor">"Tutor: " {patient.tutor_name}</span>
                <Show when=move || has_conditions>
                    <span class="patient-card__tags">
                        {conditions
                            .iter()
                            .map(|c| view! { <span class="tag">{c.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </span>
                </Show>
            </span>
        </a>
    }
}
