//! Patient detail page with tabs for each record collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/patients/:id`. The patient summary and the active tab load
//! independently through the query cache. Each tab owns its list, its
//! create/edit modal and its delete confirmation; switching tabs rebuilds
//! the tab, which is cheap because fresh lists come from the cache.

#[cfg(test)]
#[path = "patient_test.rs"]
mod patient_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use time::Date;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::exam_modal::ExamModal;
use crate::components::hospitalization_modal::HospitalizationModal;
use crate::components::patient_card::{age_text, species_line};
use crate::components::patient_modal::PatientModal;
use crate::components::record_item::{RecordDetails, RecordItem};
use crate::components::surgery_modal::SurgeryModal;
use crate::components::vaccine_modal::VaccineModal;
use crate::forms::patient::format_weight;
use crate::net::error::ApiError;
use crate::net::types::{Exam, Hospitalization, Patient, RecordKind, Surgery, Vaccine};
use crate::pages::layout::AuthedShell;
use crate::state::auth::AuthState;
use crate::state::context::AppContext;
use crate::state::modal::ModalState;
use crate::util::dates::{format_display, today};

/// Summary rows under the patient's name. Absent values read "—".
pub(crate) fn summary_rows(patient: &Patient, today: Date) -> Vec<(&'static str, String)> {
    let or_dash = |value: Option<String>| value.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| "—".to_owned());
    vec![
        ("Species", species_line(patient)),
        (
            "Birth date",
            or_dash(patient.birth_date.as_deref().map(format_display)),
        ),
        ("Age", age_text(patient, today)),
        ("Weight", or_dash(patient.weight_kg.map(|w| format!("{} kg", format_weight(w))))),
        ("Neutered", if patient.neutered { "Yes" } else { "No" }.to_owned()),
        ("Tutor", patient.tutor_name.clone()),
        ("Phone", or_dash(Some(patient.tutor_phone.clone()))),
        ("Notes", or_dash(patient.notes.clone())),
    ]
}

/// Message for a failed patient load.
pub(crate) fn load_error_message(err: &ApiError) -> String {
    match err {
        ApiError::NotFound => "Patient not found.".to_owned(),
        other => other.to_string(),
    }
}

/// Message shown in place of a record list that failed to load.
pub(crate) fn records_error_message(kind: RecordKind, err: &ApiError) -> String {
    format!("Could not load {}: {err}", kind.label().to_lowercase())
}

#[component]
pub fn PatientPage() -> impl IntoView {
    view! {
        <AuthedShell>
            <PatientDetail/>
        </AuthedShell>
    }
}

#[component]
fn PatientDetail() -> impl IntoView {
    let ctx = AppContext::expect();
    let params = use_params_map();
    let navigate = use_navigate();
    let patient_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());

    let patient = RwSignal::new(None::<Patient>);
    let failed = RwSignal::new(None::<String>);
    let tab = RwSignal::new(RecordKind::Exam);
    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    Effect::new(move || {
        let id = patient_id.get();
        if id.is_empty() || !ctx.auth.with(AuthState::is_authenticated) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let key = crate::net::api::patient_path(&id);
            match crate::state::cache::cached(ctx.cache, key, || crate::net::api::fetch_patient(&id)).await {
                Ok(found) => {
                    failed.set(None);
                    patient.set(Some(found));
                }
                Err(e) => {
                    failed.set(Some(load_error_message(&e)));
                    if !matches!(e, ApiError::NotFound) {
                        ctx.report(&e);
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_edit_close = Callback::new(move |()| editing.set(false));
    let on_edit_saved = Callback::new(move |updated: Patient| {
        editing.set(false);
        patient.set(Some(updated));
    });
    let on_delete_cancel = Callback::new(move |()| confirm_delete.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let id = patient_id.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_patient(&id).await;
                deleting.set(false);
                confirm_delete.set(false);
                match result {
                    Ok(()) => {
                        ctx.invalidate(crate::net::api::PATIENTS_ENDPOINT);
                        ctx.success("Patient deleted");
                        navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                    Err(e) => ctx.report(&e),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &navigate);
    });

    let today = today();

    view! {
        <Show when=move || failed.with(Option::is_none) && patient.with(Option::is_none)>
            <p class="patient-page patient-page--loading">"Loading patient…"</p>
        </Show>
        <Show when=move || failed.get().is_some() && patient.with(Option::is_none)>
            <div class="patient-page patient-page--missing">
                <p>{move || failed.get().unwrap_or_default()}</p>
                <a class="btn" href="/">
                    "Back to patients"
                </a>
            </div>
        </Show>
        <Show when=move || patient.with(Option::is_some)>
            <section class="patient-page">
                <header class="patient-page__header">
                    <a class="patient-page__back" href="/">
                        "‹ Patients"
                    </a>
                    <h1>{move || patient.with(|p| p.as_ref().map(|p| p.name.clone()).unwrap_or_default())}</h1>
                    <span class="patient-page__spacer"></span>
                    <button class="btn" on:click=move |_| editing.set(true)>
                        "Edit"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                        "Delete"
                    </button>
                </header>
                <dl class="patient-page__summary">
                    {move || {
                        patient
                            .get()
                            .map(|p| {
                                summary_rows(&p, today)
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </dl>
                <div class="patient-page__tags">
                    {move || {
                        patient
                            .get()
                            .map(|p| p.conditions)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <span class="tag">{c}</span> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <nav class="tabs" role="tablist">
                    {RecordKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == kind
                                    role="tab"
                                    aria-selected=move || (tab.get() == kind).to_string()
                                    on:click=move |_| tab.set(kind)
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="tabs__panel" role="tabpanel">
                    {move || {
                        let id = patient_id.get();
                        match tab.get() {
                            RecordKind::Exam => {
                                records_tab::<Exam>(
                                    ctx,
                                    id,
                                    |patient_id, modal, on_close, on_saved| {
                                        view! {
                                            <ExamModal
                                                patient_id=patient_id
                                                modal=modal
                                                on_close=on_close
                                                on_saved=on_saved
                                            />
                                        }
                                            .into_any()
                                    },
                                )
                                    .into_any()
                            }
                            RecordKind::Hospitalization => {
                                records_tab::<Hospitalization>(
                                    ctx,
                                    id,
                                    |patient_id, modal, on_close, on_saved| {
                                        view! {
                                            <HospitalizationModal
                                                patient_id=patient_id
                                                modal=modal
                                                on_close=on_close
                                                on_saved=on_saved
                                            />
                                        }
                                            .into_any()
                                    },
                                )
                                    .into_any()
                            }
                            RecordKind::Vaccine => {
                                records_tab::<Vaccine>(
                                    ctx,
                                    id,
                                    |patient_id, modal, on_close, on_saved| {
                                        view! {
                                            <VaccineModal
                                                patient_id=patient_id
                                                modal=modal
                                                on_close=on_close
                                                on_saved=on_saved
                                            />
                                        }
                                            .into_any()
                                    },
                                )
                                    .into_any()
                            }
                            RecordKind::Surgery => {
                                records_tab::<Surgery>(
                                    ctx,
                                    id,
                                    |patient_id, modal, on_close, on_saved| {
                                        view! {
                                            <SurgeryModal
                                                patient_id=patient_id
                                                modal=modal
                                                on_close=on_close
                                                on_saved=on_saved
                                            />
                                        }
                                            .into_any()
                                    },
                                )
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </section>
        </Show>
        {move || {
            let current = patient.get().filter(|_| editing.get())?;
            Some(
                view! {
                    <PatientModal
                        modal=ModalState::Edit(current)
                        on_close=on_edit_close
                        on_saved=on_edit_saved
                    />
                },
            )
        }}
        <Show when=move || confirm_delete.get()>
            <ConfirmDialog
                title="Delete patient".to_owned()
                message="This permanently deletes the patient and all of its records.".to_owned()
                busy=deleting
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}

type RenderModal<R> = fn(String, ModalState<R>, Callback<()>, Callback<()>) -> AnyView;

/// One record collection: list, add/edit modal and delete confirmation.
fn records_tab<R: RecordDetails>(ctx: AppContext, patient_id: String, render_modal: RenderModal<R>) -> impl IntoView {
    let kind = R::KIND;
    let records = RwSignal::new(None::<Result<Vec<R>, String>>);
    let reload = RwSignal::new(0_u64);
    let modal = RwSignal::new(ModalState::<R>::Closed);
    let pending_delete = RwSignal::new(None::<R>);
    let deleting = RwSignal::new(false);

    {
        let patient_id = patient_id.clone();
        Effect::new(move || {
            reload.track();
            #[cfg(feature = "hydrate")]
            {
                let patient_id = patient_id.clone();
                leptos::task::spawn_local(async move {
                    let key = crate::net::api::records_path(kind, &patient_id);
                    let fetch = || crate::net::api::list_records::<R>(&patient_id);
                    match crate::state::cache::cached(ctx.cache, key, fetch).await {
                        Ok(list) => records.set(Some(Ok(list))),
                        Err(e) => {
                            records.set(Some(Err(records_error_message(kind, &e))));
                            ctx.report(&e);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &patient_id;
        });
    }

    let on_close = Callback::new(move |()| modal.set(ModalState::Closed));
    let on_saved = Callback::new(move |()| {
        modal.set(ModalState::Closed);
        reload.update(|n| *n += 1);
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = {
        let patient_id = patient_id.clone();
        Callback::new(move |()| {
            let Some(target) = pending_delete.get_untracked() else {
                return;
            };
            if deleting.get_untracked() {
                return;
            }
            deleting.set(true);
            #[cfg(feature = "hydrate")]
            {
                let patient_id = patient_id.clone();
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::delete_record(kind, &patient_id, target.id()).await;
                    deleting.set(false);
                    pending_delete.set(None);
                    match result {
                        Ok(()) => {
                            ctx.invalidate(&crate::net::api::records_path(kind, &patient_id));
                            ctx.success(format!("{} deleted", crate::components::record_modal::capitalize(kind.noun())));
                            reload.update(|n| *n += 1);
                        }
                        Err(e) => ctx.report(&e),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (target, &patient_id);
        })
    };

    view! {
        <div class="records">
            <header class="records__header">
                <h2>{kind.label()}</h2>
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                    {format!("+ Add {}", kind.noun())}
                </button>
            </header>
            {move || match records.get() {
                None => view! { <p class="records__loading">"Loading…"</p> }.into_any(),
                Some(Err(message)) => {
                    view! {
                        <div class="records__error">
                            <p>{message}</p>
                            <button class="btn" on:click=move |_| reload.update(|n| *n += 1)>"Retry"</button>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="records__empty">{format!("No {} recorded.", kind.label().to_lowercase())}</p> }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <ul class="records__list">
                            {list
                                .into_iter()
                                .map(|record| {
                                    let for_edit = record.clone();
                                    let for_delete = record.clone();
                                    view! {
                                        <RecordItem
                                            title=record.title().to_owned()
                                            date=record.date().to_owned()
                                            details=record.details()
                                            on_edit=Callback::new(move |()| modal.set(ModalState::Edit(for_edit.clone())))
                                            on_delete=Callback::new(move |()| pending_delete.set(Some(for_delete.clone())))
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
            {move || {
                let state = modal.get();
                state.is_open().then(|| render_modal(patient_id.clone(), state, on_close, on_saved))
            }}
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    title=format!("Delete {}", kind.noun())
                    message=pending_delete
                        .with_untracked(|r| r.as_ref().map(|r| format!("\"{}\" will be removed.", r.title())))
                        .unwrap_or_default()
                    busy=deleting
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </div>
    }
}
