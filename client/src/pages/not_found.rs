//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found"</h1>
                <p class="auth-card__subtitle">"The address you opened does not exist."</p>
                <a class="btn btn--primary" href="/">
                    "Back to patients"
                </a>
            </div>
        </div>
    }
}
