//! Search Bar Component
//!
//! Keyword input for the library. Every keystroke filters the shelves right
//! away; the server query follows once typing pauses.

use leptos::prelude::*;

use crate::context::use_library;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_library();
    let store = use_app_store();

    let keyword = move || store.view().with(|v| v.keyword.clone());

    view! {
        <div class="search-bar">
            <input
                type="search"
                placeholder="Search books by title, content or tag..."
                prop:value=keyword
                on:input=move |ev| ctx.search(event_target_value(&ev))
            />
            <Show when=move || !keyword().is_empty()>
                <button
                    type="button"
                    class="search-clear"
                    title="Clear search"
                    on:click=move |_| ctx.search(String::new())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
