//! View Mode Toggle Component
//!
//! Cover / Spine / Card switcher.

use leptos::prelude::*;
use library_core::ViewMode;

use crate::context::use_library;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ViewModeToggle() -> impl IntoView {
    let ctx = use_library();
    let store = use_app_store();

    view! {
        <div class="view-mode-toggle" role="group">
            {ViewMode::ALL.into_iter().map(move |mode| {
                let is_active = move || store.view().with(|v| v.mode == mode);
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "view-mode-btn active" } else { "view-mode-btn" }
                        on:click=move |_| ctx.select_mode(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
