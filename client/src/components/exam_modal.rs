//! Create/edit exam dialog.

use leptos::prelude::*;

use crate::components::modal::{FormField, Modal, ModalActions};
use crate::components::record_modal::{RecordModalState, date_input, submit_record, text_area, text_input};
use crate::forms::records::ExamForm;
use crate::net::types::{Exam, RecordKind};
use crate::state::context::AppContext;
use crate::state::modal::ModalState;

#[component]
pub fn ExamModal(
    patient_id: String,
    modal: ModalState<Exam>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::expect();
    let title = modal.title(RecordKind::Exam.noun());
    let editing_id = modal.editing().map(|e| e.id.clone());
    let state = RecordModalState::<ExamForm>::new(modal.editing(), |f, today| f.performed_on = today);
    let form = state.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_record(ctx, state, patient_id.clone(), editing_id.clone(), on_saved);
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit novalidate=true>
                <FormField label="Exam" required=true error=state.error("name")>
                    {text_input(form, |f| f.name.clone(), |f, v| f.name = v)}
                </FormField>
                <FormField label="Date" required=true error=state.error("performed_on")>
                    {date_input(form, |f| f.performed_on.clone(), |f, v| f.performed_on = v, |_| false)}
                </FormField>
                <FormField label="Veterinarian" required=true error=state.error("veterinarian")>
                    {text_input(form, |f| f.veterinarian.clone(), |f, v| f.veterinarian = v)}
                </FormField>
                <FormField label="Result">
                    {text_area(form, |f| f.result.clone(), |f, v| f.result = v)}
                </FormField>
                <FormField label="Notes">
                    {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v)}
                </FormField>
                <ModalActions on_cancel=on_close busy=state.busy/>
            </form>
        </Modal>
    }
}
