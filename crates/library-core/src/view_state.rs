//! View State Machine
//!
//! All writes to `ViewState` go through these transitions. Hosts supply the
//! storage (a reactive store in the browser, a `RefCell` in tests).

use std::cell::RefCell;
use std::rc::Rc;

use crate::layout;
use crate::models::{FetchStatus, Item, ViewMode, ViewState};

/// Shared handle to the view state owned by one mounted view
pub trait StateHandle: Clone + 'static {
    fn update(&self, f: impl FnOnce(&mut ViewState));

    /// `None` once the host has torn the state down
    fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;

    fn snapshot(&self) -> ViewState {
        self.with(ViewState::clone).unwrap_or_default()
    }
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut());
    }

    fn with<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl ViewState {
    /// A fetch went out
    pub fn begin_loading(&mut self) {
        self.status = FetchStatus::Loading;
        self.error_message = None;
    }

    /// Replace the collection wholesale
    pub fn apply_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.status = FetchStatus::Idle;
        self.error_message = None;
    }

    /// Drop the collection so nothing stale is shown as fresh
    pub fn apply_error(&mut self, message: String) {
        self.items.clear();
        self.status = FetchStatus::Error;
        self.error_message = Some(message);
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Returns true when the mode actually changed
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Returns true when the column count changed
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let columns = layout::compute_columns(width);
        let changed = self.columns != columns;
        self.columns = columns;
        changed
    }

    /// Items passing the client-side keyword filter
    pub fn filtered(&self) -> Vec<Item> {
        layout::filter(&self.items, &self.keyword)
    }

    /// Rows of the active mode over the filtered collection
    pub fn projection(&self, spines_per_column: usize) -> layout::Projection {
        layout::project(self.mode, &self.filtered(), self.columns, spines_per_column)
    }

    /// Keyword as sent to the data service: trimmed, absent when blank
    pub fn query_keyword(&self) -> Option<String> {
        normalize_keyword(&self.keyword)
    }

    /// Nothing to show after a settled fetch
    pub fn is_empty_result(&self) -> bool {
        self.status == FetchStatus::Idle && self.filtered().is_empty()
    }
}

pub fn normalize_keyword(keyword: &str) -> Option<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
