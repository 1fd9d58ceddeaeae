//! Status Banner Component
//!
//! Loading, error and empty-result messages for the library view.

use leptos::prelude::*;
use library_core::FetchStatus;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();
    let status = move || store.view().with(|v| v.status);

    view! {
        {move || match status() {
            FetchStatus::Loading => view! {
                <div class="status-banner loading">"Loading your library..."</div>
            }.into_any(),
            FetchStatus::Error => {
                let message = store.view().with(|v| v.error_message.clone()).unwrap_or_default();
                view! {
                    <div class="status-banner error" role="alert">
                        <p>{message}</p>
                        <p class="status-hint">"Edit the search or switch views to try again."</p>
                    </div>
                }.into_any()
            }
            FetchStatus::Idle if store.view().with(|v| v.is_empty_result()) => {
                let searching = store.view().with(|v| v.query_keyword().is_some());
                let text = if searching {
                    "No books match your search."
                } else {
                    "No books yet. Save something to start your shelf."
                };
                view! { <div class="status-banner empty">{text}</div> }.into_any()
            }
            FetchStatus::Idle => ().into_any(),
        }}
    }
}
