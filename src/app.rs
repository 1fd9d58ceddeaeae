//! Shelf Frontend App
//!
//! Library page: search, view mode toggle, the shelves and the save form.

use std::rc::Rc;

use leptos::prelude::*;
use library_core::{HttpTransport, LibraryController};
use reactive_stores::Store;

use crate::bindings::{self, GlooTimer, HostTokens};
use crate::components::{LibraryView, SaveItemForm, SearchBar, StatusBanner, ViewModeToggle};
use crate::context::LibraryContext;
use crate::responsive;
use crate::store::{AppState, StoreState};

#[component]
pub fn App() -> impl IntoView {
    let config = bindings::load_config();
    let store = Store::new(AppState::default());
    let controller = LibraryController::new(
        &config,
        StoreState(store),
        Rc::new(HostTokens),
        Rc::new(HttpTransport::new()),
        Rc::new(GlooTimer),
    );
    let ctx = LibraryContext::new(store, controller);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    responsive::track_viewport(ctx);

    // Load on mount
    Effect::new(move |_| {
        ctx.mount();
    });

    view! {
        <div class="library-page">
            <header class="library-header">
                <h1>"My Library"</h1>
                <SearchBar />
                <ViewModeToggle />
            </header>

            <main class="library-main">
                <StatusBanner />
                <LibraryView />
            </main>

            <aside class="library-save">
                <SaveItemForm />
            </aside>
        </div>
    }
}
