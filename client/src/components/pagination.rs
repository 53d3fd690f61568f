//! Page-number strip under the patient feed.

use leptos::prelude::*;

use crate::util::pagination::{PageItem, Pagination};

const SIBLINGS: u32 = 1;

#[component]
pub fn PaginationControls(#[prop(into)] pagination: Signal<Pagination>, on_page: Callback<u32>) -> impl IntoView {
    let go = move |page: u32| {
        let current = pagination.get_untracked().clamped_page();
        if page != current {
            on_page.run(page);
        }
    };

    view! {
        <nav class="pagination" aria-label="Pagination">
            <span class="pagination__summary">{move || pagination.get().range_label()}</span>
            <Show when=move || { pagination.get().total_pages() > 1 }>
                <div class="pagination__pages">
                    <button
                        class="btn pagination__step"
                        disabled=move || !pagination.get().has_prev()
                        on:click=move |_| go(pagination.get_untracked().clamped_page() - 1)
                    >
                        "‹ Prev"
                    </button>
                    {move || {
                        let state = pagination.get();
                        let current = state.clamped_page();
                        state
                            .page_items(SIBLINGS)
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Page(n) => {
                                    view! {
                                        <button
                                            class="btn pagination__page"
                                            class:pagination__page--current={n == current}
                                            aria-current=(n == current).then_some("page")
                                            on:click=move |_| go(n)
                                        >
                                            {n}
                                        </button>
                                    }
                                        .into_any()
                                }
                                PageItem::Ellipsis => {
                                    view! { <span class="pagination__gap">"…"</span> }.into_any()
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    <button
                        class="btn pagination__step"
                        disabled=move || !pagination.get().has_next()
                        on:click=move |_| go(pagination.get_untracked().clamped_page() + 1)
                    >
                        "Next ›"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
