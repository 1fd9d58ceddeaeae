//! Library Controller
//!
//! The operations the library view calls: mount, keyword edits, mode switches,
//! viewport changes and saving new content.

use std::rc::Rc;

use crate::config::LibraryConfig;
use crate::error::{LibraryError, LibraryResult};
use crate::fetch::{FetchCoordinator, Timer};
use crate::graphql::Transport;
use crate::layout::{self, Projection};
use crate::models::{Item, ViewMode, ViewState};
use crate::resolver::{ClientResolver, TokenProvider};
use crate::view_state::{normalize_keyword, StateHandle};

pub struct LibraryController<S: StateHandle> {
    state: S,
    fetcher: FetchCoordinator<S>,
    spines_per_column: usize,
}

impl<S: StateHandle> LibraryController<S> {
    pub fn new(
        config: &LibraryConfig,
        state: S,
        tokens: Rc<dyn TokenProvider>,
        transport: Rc<dyn Transport>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        let resolver = ClientResolver::new(config.graphql_endpoint(), tokens, transport);
        let fetcher = FetchCoordinator::new(state.clone(), resolver, timer, config.search_debounce());
        Self {
            state,
            fetcher,
            spines_per_column: config.shelf_spines_per_column,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state.snapshot()
    }

    pub fn fetcher(&self) -> &FetchCoordinator<S> {
        &self.fetcher
    }

    pub fn projection(&self) -> Projection {
        self.state
            .with(|s| s.projection(self.spines_per_column))
            .unwrap_or_else(|| ViewState::default().projection(self.spines_per_column))
    }

    pub fn spines_per_column(&self) -> usize {
        self.spines_per_column
    }

    /// Initial load: one immediate fetch for the empty keyword
    pub async fn mount(&self, viewport_width: f64) -> LibraryResult<Vec<Item>> {
        self.resize(viewport_width);
        self.fetcher.fetch(None).await
    }

    /// Record the keystroke right away; the client-side filter reacts at once
    pub fn set_keyword(&self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        self.state.update(move |s| s.set_keyword(keyword));
    }

    /// Debounced server-side search for `keyword`
    pub async fn search(&self, keyword: impl Into<String>) -> LibraryResult<Vec<Item>> {
        let keyword = keyword.into();
        let query = normalize_keyword(&keyword);
        self.set_keyword(keyword);
        self.fetcher.fetch_debounced(query).await
    }

    /// Switch projection. Only refetches as a retry after a failed load.
    pub async fn select_mode(&self, mode: ViewMode) -> LibraryResult<Option<Vec<Item>>> {
        let mut retry = false;
        self.state.update(|s| {
            s.set_mode(mode);
            retry = s.is_error();
        });
        if !retry {
            return Ok(None);
        }
        let Some(keyword) = self.state.with(ViewState::query_keyword) else {
            return Ok(None);
        };
        log::info!("retrying failed load after switching to {} view", mode.as_str());
        self.fetcher.fetch(keyword).await.map(Some)
    }

    /// Returns true when the column count changed. Unchanged counts write nothing.
    pub fn resize(&self, viewport_width: f64) -> bool {
        let columns = layout::compute_columns(viewport_width);
        match self.state.with(|s| s.columns) {
            Some(current) if current != columns => {
                self.state.update(|s| {
                    s.set_viewport_width(viewport_width);
                });
                true
            }
            _ => false,
        }
    }

    /// Save pasted content, then reload the current view
    pub async fn save(&self, content: &str) -> LibraryResult<Item> {
        let content = content.trim();
        if content.is_empty() {
            return Err(LibraryError::InvalidInput("Nothing to save yet".into()));
        }

        let client = self.fetcher.resolver().resolve_client().await;
        let saved = client.save_item(content).await?;
        log::info!("saved item {}", saved.id);

        // The view may be gone by now; there is nothing left to reload
        let Some(keyword) = self.state.with(ViewState::query_keyword) else {
            return Ok(saved);
        };
        // The save already succeeded; a failed or superseded reload is reported through view state
        let _ = self.fetcher.fetch(keyword).await;
        Ok(saved)
    }
}
