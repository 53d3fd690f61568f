//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::ToastHost;
use crate::pages::{
    feed::FeedPage, login::LoginPage, not_found::NotFoundPage, patient::PatientPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::{auth::AuthState, cache::QueryCache, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, cache and UI contexts, restores the session from the
/// cookie once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let cache = RwSignal::new(QueryCache::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(cache);
    provide_context(ui);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    Effect::new(move || {
        let token = crate::util::session::read_token();
        let has_token = token.is_some();
        auth.set(AuthState::bootstrapping(token));
        if !has_token {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_me().await {
                Ok(user) => auth.update(|a| a.restore(user)),
                Err(e) => {
                    log::warn!("session restore failed: {e}");
                    if !crate::util::auth::handle_unauthorized(&e, auth, cache) {
                        auth.update(|a| a.loading = false);
                    }
                }
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vetcare.css"/>
        <Title text="VetCare"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=FeedPage/>
                <Route path=(StaticSegment("patients"), ParamSegment("id")) view=PatientPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
