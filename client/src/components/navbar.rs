//! Top navigation bar for signed-in pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::context::AppContext;
use crate::util::auth::end_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();

    let user_name = move || {
        ctx.auth
            .get()
            .user
            .map_or_else(|| "—".to_owned(), |u| u.name)
    };

    let on_toggle_theme = move |_| {
        let next = crate::util::theme::toggle(ctx.ui.get_untracked().theme);
        ctx.ui.update(|u| u.theme = next);
    };

    let on_logout = move |_| {
        end_session(ctx.auth, ctx.cache);
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                "VetCare"
            </a>
            <nav class="navbar__links">
                <a class="navbar__link" href="/">
                    "Patients"
                </a>
                <a class="navbar__link" href="/profile">
                    "Profile"
                </a>
            </nav>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if ctx.ui.get().theme.is_dark() { "☀" } else { "☾" }}
            </button>
            <span class="navbar__user">{user_name}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
