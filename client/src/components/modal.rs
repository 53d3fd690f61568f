//! Dialog shell and form-field wrapper shared by every create/edit modal.

use leptos::prelude::*;

use crate::forms::FormErrors;

/// Backdrop + dialog frame. Clicking the backdrop or pressing Escape closes.
#[component]
pub fn Modal(
    title: String,
    on_close: Callback<()>,
    #[prop(optional)] wide: bool,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                class:dialog--wide=wide
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <header class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" title="Close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}

/// Labelled input slot with its validation message underneath.
#[component]
pub fn FormField(
    label: &'static str,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="field" class:field--invalid=move || error.get().is_some()>
            <span class="field__label">
                {label}
                <Show when=move || required>
                    <span class="field__required" aria-hidden="true">"*"</span>
                </Show>
            </span>
            {children()}
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}

/// Reactive view of one field's message in `errors`.
pub fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}

/// Cancel + submit buttons. Submit is disabled while a request is in flight.
#[component]
pub fn ModalActions(
    on_cancel: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(default = "Save")] submit_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="dialog__actions">
            <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                {move || if busy.get() { "Saving…" } else { submit_label }}
            </button>
        </div>
    }
}
