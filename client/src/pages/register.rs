//! Account creation page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::modal::{FormField, field_error};
use crate::forms::FormErrors;
use crate::forms::account::RegisterForm;
use crate::state::context::AppContext;
use crate::util::auth::install_authed_redirect;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();
    install_authed_redirect(ctx.auth, navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(RegisterForm::validate) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&payload).await {
                    Ok(_) => {
                        ctx.success("Account created. Sign in to continue.");
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        busy.set(false);
                        ctx.report(&e);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &navigate);
    };

    let input = move |label: &'static str,
                      field: &'static str,
                      kind: &'static str,
                      get: fn(&RegisterForm) -> String,
                      set: fn(&mut RegisterForm, String)| {
        view! {
            <FormField label=label error=field_error(errors, field)>
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </FormField>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {input("Name", "name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {input("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {input("CRMV", "crmv", "text", |f| f.crmv.clone(), |f, v| f.crmv = v)}
                    {input("Phone", "phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {input("Password", "password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {input(
                        "Confirm password",
                        "confirm_password",
                        "password",
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating…" } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
