//! Patient feed: search, filters, pagination and the "new patient" modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Every change of `FeedQuery` (or an explicit
//! reload after a mutation) issues one `GET /api/patients`, served from the
//! query cache while fresh. Responses that arrive after a newer request was
//! issued are dropped so fast typing never shows an older result set.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use leptos::prelude::*;

use crate::components::pagination::PaginationControls;
use crate::components::patient_card::PatientCard;
use crate::components::patient_modal::PatientModal;
use crate::components::search_bar::SearchBar;
use crate::net::types::{Page, Patient};
use crate::pages::layout::AuthedShell;
use crate::state::auth::AuthState;
use crate::state::context::AppContext;
use crate::state::feed::FeedQuery;
use crate::state::modal::ModalState;
use crate::util::dates::today;
use crate::util::pagination::Pagination;

/// Page to jump to when `page` no longer exists for `total` results
/// (e.g. the last item on the last page was deleted).
pub(crate) fn out_of_range_page(page: u32, per_page: u32, total: u64) -> Option<u32> {
    let pagination = Pagination::new(page, per_page, total);
    (pagination.clamped_page() != page).then(|| pagination.clamped_page())
}

#[component]
pub fn FeedPage() -> impl IntoView {
    view! {
        <AuthedShell>
            <PatientFeed/>
        </AuthedShell>
    }
}

#[component]
fn PatientFeed() -> impl IntoView {
    let ctx = AppContext::expect();
    let query = RwSignal::new(FeedQuery::default());
    let results = RwSignal::new(None::<Page<Patient>>);
    let loading = RwSignal::new(false);
    let failed = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let request_seq = RwSignal::new(0_u64);
    let modal = RwSignal::new(ModalState::<Patient>::Closed);

    Effect::new(move || {
        let current = query.get();
        reload.track();
        if !ctx.auth.with(AuthState::is_authenticated) {
            return;
        }
        let seq = request_seq.get_untracked() + 1;
        request_seq.set(seq);
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let key = current.cache_key();
            let result =
                crate::state::cache::cached(ctx.cache, key, || crate::net::api::list_patients(&current)).await;
            if request_seq.get_untracked() != seq {
                return;
            }
            loading.set(false);
            match result {
                Ok(page) => {
                    if let Some(target) = out_of_range_page(current.page, current.per_page, page.total) {
                        query.update(|q| q.page = target);
                        return;
                    }
                    failed.set(None);
                    results.set(Some(page));
                }
                Err(e) => {
                    failed.set(Some(e.to_string()));
                    ctx.report(&e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, seq);
    });

    let pagination = Signal::derive(move || {
        let q = query.get();
        let total = results.with(|r| r.as_ref().map_or(0, |p| p.total));
        Pagination::new(q.page, q.per_page, total)
    });
    let on_page = Callback::new(move |page: u32| query.update(|q| q.page = page));
    let on_close = Callback::new(move |()| modal.set(ModalState::Closed));
    let on_saved = Callback::new(move |_: Patient| {
        modal.set(ModalState::Closed);
        reload.update(|n| *n += 1);
    });
    let today = today();

    view! {
        <section class="feed">
            <header class="feed__header">
                <h1>"Patients"</h1>
                <button class="btn btn--primary" on:click=move |_| modal.set(ModalState::Create)>
                    "+ New patient"
                </button>
            </header>
            <SearchBar query=query/>
            <Show when=move || failed.get().is_some()>
                <p class="feed__error">{move || failed.get().unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || results.with(Option::is_some)
                fallback=move || {
                    failed.with(Option::is_none).then(|| view! { <p class="feed__loading">"Loading patients…"</p> })
                }
            >
                <div class="feed__grid" class:feed__grid--busy=move || loading.get()>
                    {move || {
                        let items = results.get().map(|p| p.items).unwrap_or_default();
                        if items.is_empty() {
                            let message = if query.with(FeedQuery::has_filters) {
                                "No patients match these filters."
                            } else {
                                "No patients registered yet."
                            };
                            return view! { <p class="feed__empty">{message}</p> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|patient| view! { <PatientCard patient=patient today=today/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
                <PaginationControls pagination=pagination on_page=on_page/>
            </Show>
        </section>
        {move || {
            let state = modal.get();
            state
                .is_open()
                .then(|| view! { <PatientModal modal=state on_close=on_close on_saved=on_saved/> })
        }}
    }
}
