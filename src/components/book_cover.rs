//! Book Cover Component
//!
//! Front-facing book for the cover view: colored cover with title and excerpt.

use leptos::prelude::*;
use library_core::presentation::BookProps;

use super::TagChips;

#[component]
pub fn BookCover(
    book: BookProps,
    #[prop(optional, into)] on_click: Option<Callback<String>>,
    #[prop(optional, into)] on_tag_click: Option<Callback<String>>,
) -> impl IntoView {
    let BookProps { id, title, excerpt, tags, hidden_tag_count, created_at, color, .. } = book;

    let tooltip = title.clone();

    view! {
        <article
            class=format!("book-cover cover-{}", color)
            title=tooltip
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(id.clone());
                }
            }
        >
            <div class="book-cover-face">
                <h3 class="book-title">{title}</h3>
                <p class="book-excerpt">{excerpt}</p>
            </div>
            <footer class="book-cover-meta">
                <TagChips tags=tags hidden=hidden_tag_count on_tag_click=on_tag_click />
                <time class="book-date">{created_at}</time>
            </footer>
        </article>
    }
}
