//! Create/edit hospitalization dialog.
//!
//! "Still admitted" disables the discharge date; see `HospitalizationForm`.

use leptos::prelude::*;

use crate::components::modal::{FormField, Modal, ModalActions};
use crate::components::record_modal::{RecordModalState, checkbox, date_input, submit_record, text_area, text_input};
use crate::forms::records::HospitalizationForm;
use crate::net::types::{Hospitalization, RecordKind};
use crate::state::context::AppContext;
use crate::state::modal::ModalState;

#[component]
pub fn HospitalizationModal(
    patient_id: String,
    modal: ModalState<Hospitalization>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::expect();
    let title = modal.title(RecordKind::Hospitalization.noun());
    let editing_id = modal.editing().map(|h| h.id.clone());
    let state = RecordModalState::<HospitalizationForm>::new(modal.editing(), |f, today| {
        f.admitted_on = today;
        f.still_admitted = true;
    });
    let form = state.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_record(ctx, state, patient_id.clone(), editing_id.clone(), on_saved);
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit novalidate=true>
                <FormField label="Reason" required=true error=state.error("reason")>
                    {text_input(form, |f| f.reason.clone(), |f, v| f.reason = v)}
                </FormField>
                <div class="dialog__row">
                    <FormField label="Admitted on" required=true error=state.error("admitted_on")>
                        {date_input(form, |f| f.admitted_on.clone(), |f, v| f.admitted_on = v, |_| false)}
                    </FormField>
                    <FormField label="Discharged on" error=state.error("discharged_on")>
                        {date_input(
                            form,
                            |f| f.discharged_on.clone(),
                            |f, v| f.discharged_on = v,
                            HospitalizationForm::discharge_disabled,
                        )}
                    </FormField>
                </div>
                {checkbox(form, "Still admitted", |f| f.still_admitted, |f, v| f.still_admitted = v)}
                <FormField label="Notes">
                    {text_area(form, |f| f.notes.clone(), |f, v| f.notes = v)}
                </FormField>
                <ModalActions on_cancel=on_close busy=state.busy/>
            </form>
        </Modal>
    }
}
