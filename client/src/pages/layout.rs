//! Frame for signed-in pages: navbar, auth guard and loading fallback.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::state::context::AppContext;
use crate::util::auth::install_unauth_redirect;

/// Renders `children` only for an authenticated user; anyone else is sent
/// to `/login` once bootstrap settles.
#[component]
pub fn AuthedShell(children: ChildrenFn) -> impl IntoView {
    let ctx = AppContext::expect();
    install_unauth_redirect(ctx.auth, use_navigate());

    view! {
        <Show
            when=move || ctx.auth.with(AuthState::is_authenticated)
            fallback=|| view! { <div class="page page--loading"><p>"Loading…"</p></div> }
        >
            <Navbar/>
            <main class="page">{children()}</main>
        </Show>
    }
}
