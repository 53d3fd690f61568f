//! Creatable multi-select: pick from known options or type a new tag.
//!
//! Enter or `,` commits the typed text, Backspace on an empty input removes
//! the last tag, and each chip has its own remove button. The parent owns
//! the list; this component only reports the new list through `on_change`.

use leptos::prelude::*;

use crate::util::tags::{add_tag, creatable, remove_tag, suggest};

#[component]
pub fn TagInput(
    #[prop(into)] tags: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    options: &'static [&'static str],
    #[prop(default = "Add…")] placeholder: &'static str,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let open = RwSignal::new(false);

    let commit = move |raw: String| {
        let mut next = tags.get_untracked();
        if add_tag(&mut next, &raw) {
            on_change.run(next);
        }
        text.set(String::new());
    };
    let remove = move |tag: String| {
        let mut next = tags.get_untracked();
        if remove_tag(&mut next, &tag) {
            on_change.run(next);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" | "," => {
            ev.prevent_default();
            commit(text.get_untracked());
        }
        "Backspace" if text.get_untracked().is_empty() => {
            if let Some(last) = tags.get_untracked().last().cloned() {
                remove(last);
            }
        }
        "Escape" => open.set(false),
        _ => {}
    };

    let suggestions = move || tags.with(|selected| suggest(options, selected, &text.get()));
    let create = move || tags.with(|selected| creatable(options, selected, &text.get()));

    view! {
        <div class="tag-input">
            <div class="tag-input__chips">
                {move || {
                    tags.get()
                        .into_iter()
                        .map(|tag| {
                            let label = tag.clone();
                            view! {
                                <span class="tag">
                                    {label}
                                    <button
                                        type="button"
                                        class="tag__remove"
                                        aria-label="Remove"
                                        on:click=move |_| remove(tag.clone())
                                    >
                                        "×"
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <input
                    class="tag-input__field"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        text.set(event_target_value(&ev));
                        open.set(true);
                    }
                    on:focus=move |_| open.set(true)
                    on:blur=move |_| open.set(false)
                    on:keydown=on_keydown
                />
            </div>
            <Show when=move || open.get() && (!suggestions().is_empty() || create().is_some())>
                <ul class="tag-input__menu" role="listbox">
                    {move || {
                        suggestions()
                            .into_iter()
                            .map(|option| {
                                let label = option.clone();
                                view! {
                                    <li
                                        class="tag-input__option"
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            commit(option.clone());
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                    {move || {
                        create()
                            .map(|tag| {
                                let label = format!("Create \"{tag}\"");
                                view! {
                                    <li
                                        class="tag-input__option tag-input__option--create"
                                        role="option"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            commit(tag.clone());
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                    }}
                </ul>
            </Show>
        </div>
    }
}
