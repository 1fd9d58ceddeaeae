//! Layout Engine
//!
//! Pure functions turning the fetched collection into what the render targets
//! draw: column count, rows per view mode and the client-side search filter.

use crate::models::{Item, ViewMode};

pub const MIN_COLUMNS: usize = 2;

/// (exclusive upper width bound, columns); widths past the last bound get `MAX_COLUMNS`
const BREAKPOINTS: [(f64, usize); 3] = [(640.0, 2), (1024.0, 3), (1280.0, 4)];
const MAX_COLUMNS: usize = 5;

/// Cards never go wider than this many per row
const MAX_CARD_COLUMNS: usize = 3;

/// A cover row holding fewer than this share of its slots gets a bookend
const SPARSE_ROW_RATIO: f64 = 0.7;

/// Column count for a viewport width in CSS pixels
pub fn compute_columns(viewport_width: f64) -> usize {
    if !viewport_width.is_finite() {
        return if viewport_width == f64::INFINITY { MAX_COLUMNS } else { MIN_COLUMNS };
    }
    BREAKPOINTS
        .iter()
        .find(|(bound, _)| viewport_width < *bound)
        .map(|(_, columns)| *columns)
        .unwrap_or(MAX_COLUMNS)
}

/// Split into consecutive rows of `columns`; the last row may be shorter.
/// `columns` below 1 is treated as 1.
pub fn paginate_into_rows<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    items.chunks(columns.max(1)).map(<[T]>::to_vec).collect()
}

/// Case-insensitive match of a trimmed keyword against title, content or any tag.
/// A blank keyword keeps everything.
pub fn filter(items: &[Item], keyword: &str) -> Vec<Item> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items.iter().filter(|item| matches_keyword(item, &needle)).cloned().collect()
}

/// `needle` must already be trimmed and lowercased
fn matches_keyword(item: &Item, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.content.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// One shelf / grid row of a projection
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub items: Vec<Item>,
    /// Row is mostly empty; renderers may decorate the free space
    pub sparse: bool,
}

/// Rows for `mode` over an already-filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub mode: ViewMode,
    /// Slots per row used for this projection
    pub per_row: usize,
    pub rows: Vec<Row>,
}

impl Projection {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.rows.iter().map(|row| row.items.len()).sum()
    }
}

/// Slots per row for a mode at the given column count
pub fn row_capacity(mode: ViewMode, columns: usize, spines_per_column: usize) -> usize {
    let columns = columns.max(1);
    match mode {
        ViewMode::Cover => columns,
        ViewMode::Shelf => columns * spines_per_column.max(1),
        ViewMode::Card => columns.min(MAX_CARD_COLUMNS),
    }
}

pub fn project(mode: ViewMode, items: &[Item], columns: usize, spines_per_column: usize) -> Projection {
    let per_row = row_capacity(mode, columns, spines_per_column);
    let rows = paginate_into_rows(items, per_row)
        .into_iter()
        .map(|items| {
            let sparse = mode == ViewMode::Cover && is_sparse(items.len(), per_row);
            Row { items, sparse }
        })
        .collect();
    Projection { mode, per_row, rows }
}

fn is_sparse(len: usize, per_row: usize) -> bool {
    (len as f64) < per_row as f64 * SPARSE_ROW_RATIO
}
