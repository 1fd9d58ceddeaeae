//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The library core
//! writes its view state through `StoreState`, so every transition it makes is
//! visible to the components reading the store.

use leptos::prelude::*;
use library_core::{StateHandle, ViewState};
use reactive_stores::Store;

/// Progress of the "save new content" form
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SaveState {
    pub saving: bool,
    /// Last outcome shown under the form
    pub message: Option<String>,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Keyword, mode, columns, items and fetch status of the library view
    pub view: ViewState,
    pub save: SaveState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// The store's `view` field as the core's state handle
#[derive(Clone, Copy)]
pub struct StoreState(pub AppStore);

impl StateHandle for StoreState {
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        // A task can outlive the view it was started from; writes after unmount are dropped
        if self.0.view().try_update(f).is_none() {
            log::debug!("view state disposed, dropping update");
        }
    }

    fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        self.0.view().try_with_untracked(f)
    }
}
