//! Profile page: account details, password change and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::modal::{FormField, field_error};
use crate::forms::FormErrors;
use crate::forms::account::{PasswordForm, ProfileForm};
use crate::pages::layout::AuthedShell;
use crate::state::context::AppContext;
use crate::util::auth::end_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AuthedShell>
            <ProfileSections/>
        </AuthedShell>
    }
}

#[component]
fn ProfileSections() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();

    // Rendered only inside `AuthedShell`, so the user is present.
    let initial = ctx.auth.with_untracked(|a| a.user.as_ref().map(ProfileForm::from_user)).unwrap_or_default();
    let profile = RwSignal::new(initial);
    let profile_errors = RwSignal::new(FormErrors::default());
    let profile_busy = RwSignal::new(false);

    let password = RwSignal::new(PasswordForm::default());
    let password_errors = RwSignal::new(FormErrors::default());
    let password_busy = RwSignal::new(false);

    let on_save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if profile_busy.get_untracked() {
            return;
        }
        let payload = match profile.with_untracked(ProfileForm::validate) {
            Ok(payload) => payload,
            Err(found) => {
                profile_errors.set(found);
                return;
            }
        };
        profile_errors.set(FormErrors::default());
        profile_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_profile(&payload).await;
            profile_busy.set(false);
            match result {
                Ok(user) => {
                    profile.set(ProfileForm::from_user(&user));
                    ctx.invalidate(crate::net::api::ME_ENDPOINT);
                    ctx.auth.update(|a| a.user = Some(user));
                    ctx.success("Profile updated");
                }
                Err(e) => ctx.report(&e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get_untracked() {
            return;
        }
        let payload = match password.with_untracked(PasswordForm::validate) {
            Ok(payload) => payload,
            Err(found) => {
                password_errors.set(found);
                return;
            }
        };
        password_errors.set(FormErrors::default());
        password_busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_password(&payload).await;
            password_busy.set(false);
            match result {
                Ok(()) => {
                    password.set(PasswordForm::default());
                    ctx.success("Password changed");
                }
                Err(crate::net::error::ApiError::Validation(message)) => {
                    password_errors.update(|e| e.add("current", message));
                }
                Err(e) => ctx.report(&e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let on_logout = move |_| {
        end_session(ctx.auth, ctx.cache);
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    let profile_input = move |label: &'static str,
                              field: &'static str,
                              kind: &'static str,
                              get: fn(&ProfileForm) -> String,
                              set: fn(&mut ProfileForm, String)| {
        view! {
            <FormField label=label error=field_error(profile_errors, field)>
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || profile.with(get)
                    on:input=move |ev| profile.update(|f| set(f, event_target_value(&ev)))
                />
            </FormField>
        }
    };
    let password_input = move |label: &'static str,
                               field: &'static str,
                               get: fn(&PasswordForm) -> String,
                               set: fn(&mut PasswordForm, String)| {
        view! {
            <FormField label=label error=field_error(password_errors, field)>
                <input
                    class="dialog__input"
                    type="password"
                    prop:value=move || password.with(get)
                    on:input=move |ev| password.update(|f| set(f, event_target_value(&ev)))
                />
            </FormField>
        }
    };

    view! {
        <section class="profile">
            <h1>"My profile"</h1>
            <form class="profile__card" on:submit=on_save_profile novalidate=true>
                <h2>"Account"</h2>
                {profile_input("Name", "name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {profile_input("Email", "email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                {profile_input("CRMV", "crmv", "text", |f| f.crmv.clone(), |f, v| f.crmv = v)}
                {profile_input("Phone", "phone", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                <div class="dialog__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || profile_busy.get()>
                        "Save profile"
                    </button>
                </div>
            </form>
            <form class="profile__card" on:submit=on_change_password novalidate=true>
                <h2>"Change password"</h2>
                {password_input("Current password", "current", |f| f.current.clone(), |f, v| f.current = v)}
                {password_input("New password", "new_password", |f| f.new_password.clone(), |f, v| f.new_password = v)}
                {password_input("Confirm new password", "confirm", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                <div class="dialog__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || password_busy.get()>
                        "Change password"
                    </button>
                </div>
            </form>
            <div class="profile__card profile__card--danger">
                <h2>"Session"</h2>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </section>
    }
}
