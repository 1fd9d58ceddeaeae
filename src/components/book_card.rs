//! Book Card Component
//!
//! Text-first card for the card view, with a longer excerpt.

use leptos::prelude::*;
use library_core::presentation::BookProps;

use super::TagChips;

#[component]
pub fn BookCard(
    book: BookProps,
    #[prop(optional, into)] on_click: Option<Callback<String>>,
    #[prop(optional, into)] on_tag_click: Option<Callback<String>>,
) -> impl IntoView {
    let BookProps { id, title, excerpt, tags, hidden_tag_count, created_at, color, .. } = book;

    view! {
        <article
            class="book-card"
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(id.clone());
                }
            }
        >
            <div class=format!("book-card-accent cover-{}", color)></div>
            <h3 class="book-title">{title}</h3>
            <p class="book-excerpt">{excerpt}</p>
            <footer class="book-card-meta">
                <TagChips tags=tags hidden=hidden_tag_count on_tag_click=on_tag_click />
                <time class="book-date">{created_at}</time>
            </footer>
        </article>
    }
}
