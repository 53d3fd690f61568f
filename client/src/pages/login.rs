//! Login page: email + password against `POST /api/sessions`.
//!
//! On success the token goes to the session cookie, `AuthState` is filled
//! from the response and the user lands on the feed. Signed-in users who
//! open `/login` are bounced to `/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::modal::{FormField, field_error};
use crate::forms::FormErrors;
use crate::forms::account::LoginForm;
use crate::net::error::ApiError;
use crate::state::context::AppContext;
use crate::util::auth::install_authed_redirect;

pub(crate) const BAD_CREDENTIALS: &str = "Invalid email or password.";

/// Banner text for a failed sign-in. A 401 here means wrong credentials,
/// not an expired session.
pub(crate) fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized | ApiError::NotFound => BAD_CREDENTIALS.to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();
    install_authed_redirect(ctx.auth, navigate.clone());

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(LoginForm::validate) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FormErrors::default());
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&payload).await {
                    Ok(session) => {
                        crate::util::session::store_token(&session.token);
                        ctx.cache.update(crate::state::cache::QueryCache::clear);
                        ctx.auth.update(|a| a.sign_in(session));
                        navigate("/", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        info.set(login_error_message(&e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &navigate);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"VetCare"</h1>
                <p class="auth-card__subtitle">"Sign in to your clinic account"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <FormField label="Email" error=field_error(errors, "email")>
                        <input
                            class="auth-input"
                            type="email"
                            autocomplete="username"
                            placeholder="you@clinic.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label="Password" error=field_error(errors, "password")>
                        <input
                            class="auth-input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </FormField>
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in…" } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message auth-message--error">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
