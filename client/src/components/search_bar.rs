//! Search box and species/sex filters above the patient feed.
//!
//! DESIGN
//! ======
//! Typing updates a local signal immediately so the input stays responsive;
//! the feed query only sees the text after `SEARCH_DEBOUNCE_MS` of quiet.
//! Filters apply on change. Every change resets the feed to page 1 (see
//! `FeedQuery`).

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::net::types::{Sex, Species};
use crate::state::feed::FeedQuery;
use crate::util::debounce::{SEARCH_DEBOUNCE_MS, debounced};

#[component]
pub fn SearchBar(query: RwSignal<FeedQuery>) -> impl IntoView {
    let text = RwSignal::new(query.get_untracked().search);
    let apply_search = debounced(SEARCH_DEBOUNCE_MS, move |value: String| {
        query.update(|q| {
            q.set_search(&value);
        });
    });

    // Clearing also supersedes any search still waiting on its timer.
    let supersede = apply_search.clone();
    let on_clear = move |_: leptos::ev::MouseEvent| {
        text.set(String::new());
        query.update(FeedQuery::clear_filters);
        supersede(String::new());
    };

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder="Search by patient or tutor name"
                aria-label="Search patients"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    text.set(value.clone());
                    apply_search(value);
                }
            />
            <select
                class="search-bar__select"
                aria-label="Species"
                prop:value=move || query.get().species.map_or("", Species::as_str)
                on:change=move |ev| {
                    let species = Species::parse(&event_target_value(&ev));
                    query.update(|q| q.set_species(species));
                }
            >
                <option value="">"All species"</option>
                {Species::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="search-bar__select"
                aria-label="Sex"
                prop:value=move || query.get().sex.map_or("", Sex::as_str)
                on:change=move |ev| {
                    let sex = Sex::parse(&event_target_value(&ev));
                    query.update(|q| q.set_sex(sex));
                }
            >
                <option value="">"Any sex"</option>
                {Sex::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <Show when=move || query.get().has_filters()>
                <button class="btn search-bar__clear" on:click=on_clear.clone()>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
