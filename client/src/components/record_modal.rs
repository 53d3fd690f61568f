//! Plumbing shared by the four record modals.
//!
//! DESIGN
//! ======
//! Each record kind has its own modal component because the inputs differ,
//! but validation and the create-or-update round trip are identical once
//! the form implements `RecordForm`. `submit_record` owns that round trip:
//! validate, POST or PUT, invalidate the collection, toast, notify parent.

#[cfg(test)]
#[path = "record_modal_test.rs"]
mod record_modal_test;

use leptos::prelude::*;

use crate::forms::{FormErrors, RecordForm};
use crate::net::types::PatientRecord;
use crate::state::context::AppContext;
use crate::util::dates::{to_iso, today};

/// Form state for one open record modal.
pub struct RecordModalState<F: RecordForm> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FormErrors>,
    pub busy: RwSignal<bool>,
}

impl<F: RecordForm> Clone for RecordModalState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: RecordForm> Copy for RecordModalState<F> {}

impl<F: RecordForm> RecordModalState<F> {
    /// Prefill from `editing`, or start blank with `stamp` applied so date
    /// inputs default to today.
    pub fn new(editing: Option<&F::Record>, stamp: impl FnOnce(&mut F, String)) -> Self {
        let form = editing.map_or_else(
            || {
                let mut blank = F::default();
                stamp(&mut blank, to_iso(today()));
                blank
            },
            F::from_record,
        );
        Self { form: RwSignal::new(form), errors: RwSignal::new(FormErrors::default()), busy: RwSignal::new(false) }
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        crate::components::modal::field_error(self.errors, field)
    }
}

/// Validate and send the form. `editing_id = None` creates.
pub fn submit_record<F: RecordForm>(
    ctx: AppContext,
    state: RecordModalState<F>,
    patient_id: String,
    editing_id: Option<String>,
    on_saved: Callback<()>,
) {
    if state.busy.get_untracked() {
        return;
    }
    let payload = match state.form.with_untracked(|f| f.validate(today())) {
        Ok(payload) => payload,
        Err(found) => {
            state.errors.set(found);
            return;
        }
    };
    state.errors.set(FormErrors::default());
    state.busy.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let kind = <F::Record as PatientRecord>::KIND;
        let result = match editing_id.as_deref() {
            Some(id) => crate::net::api::update_record::<F::Record>(&patient_id, id, &payload).await,
            None => crate::net::api::create_record::<F::Record>(&patient_id, &payload).await,
        };
        state.busy.set(false);
        match result {
            Ok(_) => {
                ctx.invalidate(&crate::net::api::records_path(kind, &patient_id));
                let verb = if editing_id.is_some() { "updated" } else { "added" };
                ctx.success(format!("{} {verb}", capitalize(kind.noun())));
                on_saved.run(());
            }
            Err(e) => ctx.report(&e),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (payload, patient_id, editing_id, on_saved, ctx);
}

pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Date input bound to one field of a record form.
pub fn date_input<F: RecordForm>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
    disabled: fn(&F) -> bool,
) -> impl IntoView {
    view! {
        <input
            class="dialog__input"
            type="date"
            prop:value=move || form.with(get)
            prop:disabled=move || form.with(disabled)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

/// Single-line text input bound to one field of a record form.
pub fn text_input<F: RecordForm>(form: RwSignal<F>, get: fn(&F) -> String, set: fn(&mut F, String)) -> impl IntoView {
    view! {
        <input
            class="dialog__input"
            type="text"
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}

pub fn text_area<F: RecordForm>(form: RwSignal<F>, get: fn(&F) -> String, set: fn(&mut F, String)) -> impl IntoView {
    view! {
        <textarea
            class="dialog__input dialog__textarea"
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        ></textarea>
    }
}

/// Checkbox bound to one flag of a record form.
pub fn checkbox<F: RecordForm>(
    form: RwSignal<F>,
    label: &'static str,
    get: fn(&F) -> bool,
    set: fn(&mut F, bool),
) -> impl IntoView {
    view! {
        <label class="field field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.with(get)
                on:change=move |ev| form.update(|f| set(f, event_target_checked(&ev)))
            />
            {label}
        </label>
    }
}
