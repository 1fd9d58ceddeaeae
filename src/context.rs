//! Application Context
//!
//! The library controller and store, shared via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use library_core::{LibraryController, ViewMode};

use crate::responsive;
use crate::store::{AppStore, StoreState};

pub type Controller = LibraryController<StoreState>;

/// Copyable handle for components; the controller itself stays on this thread
#[derive(Clone, Copy)]
pub struct LibraryContext {
    pub store: AppStore,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl LibraryContext {
    pub fn new(store: AppStore, controller: Controller) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<Controller> {
        self.controller.get_value()
    }

    pub fn spines_per_column(&self) -> usize {
        self.controller.with_value(|c| c.spines_per_column())
    }

    /// Initial load for the current viewport
    pub fn mount(&self) {
        let controller = self.controller();
        let width = responsive::viewport_width();
        spawn_local(async move {
            if let Ok(items) = controller.mount(width).await {
                log::info!("[APP] Loaded {} books", items.len());
            }
        });
    }

    /// Keyword edit: the filter updates now, the server query after the debounce
    pub fn search(&self, keyword: String) {
        let controller = self.controller();
        controller.set_keyword(keyword.clone());
        spawn_local(async move {
            let _ = controller.search(keyword).await;
        });
    }

    pub fn select_mode(&self, mode: ViewMode) {
        let controller = self.controller();
        spawn_local(async move {
            let _ = controller.select_mode(mode).await;
        });
    }

    pub fn resize(&self, width: f64) {
        if self.controller.with_value(|c| c.resize(width)) {
            log::debug!("[APP] viewport {}px", width);
        }
    }
}

/// Get the library context
pub fn use_library() -> LibraryContext {
    expect_context::<LibraryContext>()
}
