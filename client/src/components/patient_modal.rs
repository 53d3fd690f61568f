//! Create/edit patient dialog.

use leptos::prelude::*;

use crate::components::modal::{FormField, Modal, ModalActions, field_error};
use crate::components::tag_input::TagInput;
use crate::forms::FormErrors;
use crate::forms::patient::PatientForm;
use crate::net::types::{Patient, Sex, Species};
use crate::state::context::AppContext;
use crate::state::modal::ModalState;
use crate::util::dates::today;
use crate::util::tags::KNOWN_CONDITIONS;

/// `ModalState::Create` creates a patient. `on_saved` receives the server copy.
#[component]
pub fn PatientModal(modal: ModalState<Patient>, on_close: Callback<()>, on_saved: Callback<Patient>) -> impl IntoView {
    let ctx = AppContext::expect();
    let editing_id = modal.editing().map(|p| p.id.clone());
    let title = modal.title("patient");
    let form = RwSignal::new(modal.editing().map(PatientForm::from_patient).unwrap_or_default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(|f| f.validate(today())) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        let editing_id = editing_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match editing_id.as_deref() {
                Some(id) => crate::net::api::update_patient(id, &payload).await,
                None => crate::net::api::create_patient(&payload).await,
            };
            busy.set(false);
            match result {
                Ok(patient) => {
                    ctx.invalidate(crate::net::api::PATIENTS_ENDPOINT);
                    ctx.success(if editing_id.is_some() { "Patient updated" } else { "Patient created" });
                    on_saved.run(patient);
                }
                Err(e) => ctx.report(&e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, editing_id, ctx, on_saved);
    };

    view! {
        <Modal title=title on_close=on_close wide=true>
            <form class="dialog__form" on:submit=on_submit novalidate=true>
                <div class="dialog__grid">
                    <FormField label="Name" required=true error=field_error(errors, "name")>
                        {text_input(form, |f| f.name.clone(), |f, v| f.name = v)}
                    </FormField>
                    <FormField label="Species">
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.species.as_str())
                            on:change=move |ev| {
                                if let Some(species) = Species::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.species = species);
                                }
                            }
                        >
                            {Species::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </FormField>
                    <FormField label="Breed">
                        {text_input(form, |f| f.breed.clone(), |f, v| f.breed = v)}
                    </FormField>
                    <FormField label="Sex">
                        <select
                            class="dialog__input"
                            prop:value=move || form.with(|f| f.sex.as_str())
                            on:change=move |ev| {
                                if let Some(sex) = Sex::parse(&event_target_value(&ev)) {
                                    form.update(|f| f.sex = sex);
                                }
                            }
                        >
                            {Sex::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </FormField>
                    <FormField label="Birth date" required=true error=field_error(errors, "birth_date")>
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || form.with(|f| f.birth_date.clone())
                            prop:disabled=move || form.with(PatientForm::birth_date_disabled)
                            on:input=move |ev| form.update(|f| f.birth_date = event_target_value(&ev))
                        />
                    </FormField>
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.birth_date_unknown)
                            on:change=move |ev| form.update(|f| f.birth_date_unknown = event_target_checked(&ev))
                        />
                        "Birth date unknown"
                    </label>
                    <FormField label="Weight (kg)" error=field_error(errors, "weight_kg")>
                        <input
                            class="dialog__input"
                            type="text"
                            inputmode="decimal"
                            prop:value=move || form.with(|f| f.weight_kg.clone())
                            on:input=move |ev| form.update(|f| f.weight_kg = event_target_value(&ev))
                        />
                    </FormField>
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.neutered)
                            on:change=move |ev| form.update(|f| f.neutered = event_target_checked(&ev))
                        />
                        "Neutered"
                    </label>
                    <FormField label="Tutor name" required=true error=field_error(errors, "tutor_name")>
                        {text_input(form, |f| f.tutor_name.clone(), |f, v| f.tutor_name = v)}
                    </FormField>
                    <FormField label="Tutor phone" required=true error=field_error(errors, "tutor_phone")>
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || form.with(|f| f.tutor_phone.clone())
                            on:input=move |ev| form.update(|f| f.tutor_phone = event_target_value(&ev))
                        />
                    </FormField>
                </div>
                <FormField label="Conditions">
                    <TagInput
                        tags=Signal::derive(move || form.with(|f| f.conditions.clone()))
                        on_change=Callback::new(move |tags: Vec<String>| form.update(|f| f.conditions = tags))
                        options=KNOWN_CONDITIONS
                        placeholder="Allergies, chronic conditions…"
                    />
                </FormField>
                <FormField label="Notes">
                    <textarea
                        class="dialog__input dialog__textarea"
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </FormField>
                <ModalActions on_cancel=on_close busy=busy/>
            </form>
        </Modal>
    }
}

fn text_input(
    form: RwSignal<PatientForm>,
    get: fn(&PatientForm) -> String,
    set: fn(&mut PatientForm, String),
) -> impl IntoView {
    view! {
        <input
            class="dialog__input"
            type="text"
            prop:value=move || form.with(get)
            on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
        />
    }
}
