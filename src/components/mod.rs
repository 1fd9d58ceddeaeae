//! UI Components
//!
//! Leptos components for the library page.

mod search_bar;
mod view_mode_toggle;
mod status_banner;
mod library_view;
mod tag_chips;
mod book_cover;
mod book_spine;
mod book_card;
mod save_item_form;

pub use search_bar::SearchBar;
pub use view_mode_toggle::ViewModeToggle;
pub use status_banner::StatusBanner;
pub use library_view::LibraryView;
pub use tag_chips::TagChips;
pub use book_cover::BookCover;
pub use book_spine::BookSpine;
pub use book_card::BookCard;
pub use save_item_form::SaveItemForm;
