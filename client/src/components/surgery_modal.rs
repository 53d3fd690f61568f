//! Create/edit surgery dialog.

use leptos::prelude::*;

use crate::components::modal::{FormField, Modal, ModalActions};
use crate::components::record_modal::{RecordModalState, date_input, submit_record, text_area, text_input};
use crate::forms::records::SurgeryForm;
use crate::net::types::{RecordKind, Surgery};
use crate::state::context::AppContext;
use crate::state::modal::ModalState;

#[component]
pub fn SurgeryModal(
    patient_id: String,
    modal: ModalState<Surgery>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::expect();
    let title = modal.title(RecordKind::Surgery.noun());
    let editing_id = modal.editing().map(|s| s.id.clone());
    let state = RecordModalState::<SurgeryForm>::new(modal.editing(), |f, today| f.performed_on = today);
    let form = state.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_record(ctx, state, patient_id.clone(), editing_id.clone(), on_saved);
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit novalidate=true>
                <FormField label="Procedure" required=true error=state.error("name")>
                    {text_input(form, |f| f.name.clone(), |f, v| f.name = v)}
                </FormField>
                <FormField label="Date" required=true error=state.error("performed_on")>
                    {date_input(form, |f| f.performed_on.clone(), |f, v| f.performed_on = v, |_| false)}
                </FormField>
                <FormField label="Surgeon" required=true error=state.error("surgeon")>
                    {text_input(form, |f| f.surgeon.clone(), |f, v| f.surgeon = v)}
                </FormField>
                <FormField label="Anesthesia">
                    {text_input(form, |f| f.anesthesia.clone(), |f, v| f.anesthesia = v)}
                </FormField>
                <FormField label="Notes">
                    {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v)}
                </FormField>
                <ModalActions on_cancel=on_close busy=state.busy/>
            </form>
        </Modal>
    }
}
