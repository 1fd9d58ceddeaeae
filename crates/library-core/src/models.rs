//! Library Models
//!
//! Wire entities returned by the data service and the client-only view state.

use serde::{Deserialize, Serialize};

/// One saved unit of content (matches the `Book` type of the data service)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque, stable identity
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Display order as saved; duplicates are kept
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO-8601 timestamp, display only
    pub created_at: String,
}

impl Item {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            created_at: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }
}

/// Which projection of the collection is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Front covers on shelves
    #[default]
    Cover,
    /// Narrow spines, many per shelf
    Shelf,
    /// Plain card grid
    Card,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Cover, ViewMode::Shelf, ViewMode::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Cover => "cover",
            ViewMode::Shelf => "shelf",
            ViewMode::Card => "card",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Cover => "Cover View",
            ViewMode::Shelf => "Spine View",
            ViewMode::Card => "Card View",
        }
    }
}

/// Fetch lifecycle as seen by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Client-local state of the library view. Created on mount, dropped on unmount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub keyword: String,
    pub mode: ViewMode,
    /// Always >= 1
    pub columns: usize,
    /// Last successfully fetched collection, order as received
    pub items: Vec<Item>,
    pub status: FetchStatus,
    /// Only set while `status == FetchStatus::Error`
    pub error_message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            mode: ViewMode::default(),
            columns: crate::layout::MIN_COLUMNS,
            items: Vec::new(),
            status: FetchStatus::Idle,
            error_message: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }
}
