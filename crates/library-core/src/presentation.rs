//! Render Props
//!
//! Derives the already-computed props handed to cover, spine and card render
//! targets. Nothing here touches view state.

use chrono::{DateTime, NaiveDate};

use crate::models::Item;

pub const COVER_EXCERPT_CHARS: usize = 80;
pub const CARD_EXCERPT_CHARS: usize = 150;
pub const MAX_VISIBLE_TAGS: usize = 3;

/// Cover palette, picked by title hash
pub const COVER_COLORS: [&str; 10] = [
    "blue", "red", "green", "purple", "orange", "teal", "pink", "indigo", "brown", "gray",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpineHeight {
    Small,
    Medium,
    Large,
}

impl SpineHeight {
    /// More tags, taller spine
    pub fn for_tag_count(count: usize) -> Self {
        match count {
            n if n > 3 => SpineHeight::Large,
            n if n > 1 => SpineHeight::Medium,
            _ => SpineHeight::Small,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpineHeight::Small => "sm",
            SpineHeight::Medium => "md",
            SpineHeight::Large => "lg",
        }
    }
}

/// Sum of the title's UTF-16 code units modulo the palette size
pub fn cover_color(title: &str) -> &'static str {
    let hash: u64 = title.encode_utf16().map(u64::from).sum();
    COVER_COLORS[(hash % COVER_COLORS.len() as u64) as usize]
}

/// First `max_chars` characters followed by `...` when the text is longer
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// The tags shown inline plus how many were left out
pub fn visible_tags(tags: &[String]) -> (&[String], usize) {
    let shown = tags.len().min(MAX_VISIBLE_TAGS);
    (&tags[..shown], tags.len() - shown)
}

/// `Jan 5, 2024` style date; unparseable input is returned unchanged
pub fn format_created_at(created_at: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(created_at) {
        return ts.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(created_at, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    created_at.to_string()
}

/// Props shared by every render target
#[derive(Debug, Clone, PartialEq)]
pub struct BookProps {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub hidden_tag_count: usize,
    pub created_at: String,
    pub color: &'static str,
    pub spine_height: SpineHeight,
}

impl BookProps {
    pub fn for_cover(item: &Item) -> Self {
        Self::build(item, COVER_EXCERPT_CHARS)
    }

    pub fn for_card(item: &Item) -> Self {
        Self::build(item, CARD_EXCERPT_CHARS)
    }

    pub fn for_spine(item: &Item) -> Self {
        Self::build(item, 0)
    }

    fn build(item: &Item, excerpt_chars: usize) -> Self {
        let (shown, hidden) = visible_tags(&item.tags);
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            excerpt: if excerpt_chars == 0 { String::new() } else { excerpt(&item.content, excerpt_chars) },
            tags: shown.to_vec(),
            hidden_tag_count: hidden,
            created_at: format_created_at(&item.created_at),
            color: cover_color(&item.title),
            spine_height: SpineHeight::for_tag_count(item.tags.len()),
        }
    }
}
