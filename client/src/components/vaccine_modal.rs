//! Create/edit vaccine dialog.
//!
//! "Single dose" disables the next-dose date; see `VaccineForm`.

use leptos::prelude::*;

use crate::components::modal::{FormField, Modal, ModalActions};
use crate::components::record_modal::{RecordModalState, checkbox, date_input, submit_record, text_input};
use crate::forms::records::VaccineForm;
use crate::net::types::{RecordKind, Vaccine};
use crate::state::context::AppContext;
use crate::state::modal::ModalState;

#[component]
pub fn VaccineModal(
    patient_id: String,
    modal: ModalState<Vaccine>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = AppContext::expect();
    let title = modal.title(RecordKind::Vaccine.noun());
    let editing_id = modal.editing().map(|v| v.id.clone());
    let state = RecordModalState::<VaccineForm>::new(modal.editing(), |f, today| f.applied_on = today);
    let form = state.form;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_record(ctx, state, patient_id.clone(), editing_id.clone(), on_saved);
    };

    view! {
        <Modal title=title on_close=on_close>
            <form class="dialog__form" on:submit=on_submit novalidate=true>
                <FormField label="Vaccine" required=true error=state.error("name")>
                    {text_input(form, |f| f.name.clone(), |f, v| f.name = v)}
                </FormField>
                <div class="dialog__row">
                    <FormField label="Applied on" required=true error=state.error("applied_on")>
                        {date_input(form, |f| f.applied_on.clone(), |f, v| f.applied_on = v, |_| false)}
                    </FormField>
                    <FormField label="Next dose" error=state.error("next_dose_on")>
                        {date_input(
                            form,
                            |f| f.next_dose_on.clone(),
                            |f, v| f.next_dose_on = v,
                            VaccineForm::next_dose_disabled,
                        )}
                    </FormField>
                </div>
                {checkbox(form, "Single dose", |f| f.single_dose, |f, v| f.single_dose = v)}
                <FormField label="Batch">
                    {text_input(form, |f| f.batch.clone(), |f, v| f.batch = v)}
                </FormField>
                <ModalActions on_cancel=on_close busy=state.busy/>
            </form>
        </Modal>
    }
}
