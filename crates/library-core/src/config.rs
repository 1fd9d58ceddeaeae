//! Library Configuration
//!
//! Host pages may embed a JSON block to override any of these values;
//! missing fields fall back to the defaults below.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, LibraryResult};

/// Used when neither the host page nor the build environment names an API
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_SPINES_PER_COLUMN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LibraryConfig {
    /// Base URL of the data service, without the `/graphql` suffix
    pub api_url: String,
    /// Quiet interval after the last keystroke before a search fetch
    pub search_debounce_ms: u64,
    /// Spine slots per layout column in shelf view
    pub shelf_spines_per_column: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("SHELF_API_URL").unwrap_or(DEFAULT_API_URL).to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            shelf_spines_per_column: DEFAULT_SPINES_PER_COLUMN,
        }
    }
}

impl LibraryConfig {
    /// Parse an embedded JSON config block
    pub fn from_json(json: &str) -> LibraryResult<Self> {
        let config: LibraryConfig = serde_json::from_str(json)
            .map_err(|e| LibraryError::InvalidInput(format!("config: {}", e)))?;
        config.validate()
    }

    fn validate(mut self) -> LibraryResult<Self> {
        if self.api_url.trim().is_empty() {
            return Err(LibraryError::InvalidInput("config: apiUrl must not be empty".into()));
        }
        self.shelf_spines_per_column = self.shelf_spines_per_column.max(1);
        Ok(self)
    }

    /// GraphQL endpoint derived from `api_url`
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.api_url.trim().trim_end_matches('/'))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
