//! Corner notice for the latest `UiState::toast`.

use leptos::prelude::*;

use crate::state::ui::{ToastKind, UiState};

pub const TOAST_MS: u32 = 4_000;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Each new toast schedules its own dismissal; `dismiss` ignores stale ids.
    Effect::new(move || {
        let Some(id) = ui.with(|u| u.toast.as_ref().map(|t| t.id)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            ui.update(|u| u.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    view! {
        {move || {
            ui.get()
                .toast
                .map(|toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class="toast"
                            class:toast--error={toast.kind == ToastKind::Error}
                            role="status"
                            aria-live="polite"
                            on:click=move |_| ui.update(|u| u.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                })
        }}
    }
}
