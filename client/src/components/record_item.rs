//! One row in a patient's exam/hospitalization/vaccine/surgery list.

#[cfg(test)]
#[path = "record_item_test.rs"]
mod record_item_test;

use leptos::prelude::*;

use crate::net::types::{Exam, Hospitalization, PatientRecord, Surgery, Vaccine};
use crate::util::dates::format_display;

/// Label/value lines shown under a record's title. Blank optionals are skipped.
pub trait RecordDetails: PatientRecord {
    fn details(&self) -> Vec<(&'static str, String)>;
}

fn push_opt(lines: &mut Vec<(&'static str, String)>, label: &'static str, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        lines.push((label, value.clone()));
    }
}

impl RecordDetails for Exam {
    fn details(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Veterinarian", self.veterinarian.clone())];
        push_opt(&mut lines, "Result", self.result.as_ref());
        push_opt(&mut lines, "Notes", self.notes.as_ref());
        lines
    }
}

impl RecordDetails for Hospitalization {
    fn details(&self) -> Vec<(&'static str, String)> {
        let discharge = self
            .discharged_on
            .as_deref()
            .map_or_else(|| "Still admitted".to_owned(), format_display);
        let mut lines = vec![("Discharge", discharge)];
        push_opt(&mut lines, "Notes", self.notes.as_ref());
        lines
    }
}

impl RecordDetails for Vaccine {
    fn details(&self) -> Vec<(&'static str, String)> {
        let next = self
            .next_dose_on
            .as_deref()
            .map_or_else(|| "Single dose".to_owned(), format_display);
        let mut lines = vec![("Next dose", next)];
        push_opt(&mut lines, "Batch", self.batch.as_ref());
        lines
    }
}

impl RecordDetails for Surgery {
    fn details(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Surgeon", self.surgeon.clone())];
        push_opt(&mut lines, "Anesthesia", self.anesthesia.as_ref());
        push_opt(&mut lines, "Notes", self.notes.as_ref());
        lines
    }
}

#[component]
pub fn RecordItem(
    title: String,
    date: String,
    details: Vec<(&'static str, String)>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let date = format_display(&date);
    view! {
        <li class="record-item">
            <div class="record-item__head">
                <span class="record-item__title">{title}</span>
                <span class="record-item__date">{date}</span>
                <span class="record-item__spacer"></span>
                <button class="btn btn--small" on:click=move |_| on_edit.run(())>
                    "Edit"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(())>
                    "Delete"
                </button>
            </div>
            <dl class="record-item__details">
                {details
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </li>
    }
}
