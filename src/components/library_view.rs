//! Library View Component
//!
//! Renders the active projection of the fetched collection as rows of
//! covers, spines or cards.

use leptos::prelude::*;
use library_core::layout::Projection;
use library_core::presentation::BookProps;
use library_core::{Item, ViewMode};

use super::{BookCard, BookCover, BookSpine};
use crate::context::use_library;
use crate::store::AppStateStoreFields;

#[component]
pub fn LibraryView() -> impl IntoView {
    let ctx = use_library();
    let store = ctx.store;
    let spines = ctx.spines_per_column();

    let projection = Memo::new(move |_| store.view().with(|v| v.projection(spines)));

    let on_open = Callback::new(|id: String| {
        log::info!("[LIBRARY] open book {}", id);
    });
    let on_tag_click = Callback::new(move |tag: String| {
        log::debug!("[LIBRARY] search by tag {}", tag);
        ctx.search(tag);
    });

    view! {
        <section class=move || format!("library-view library-{}", projection.with(|p| p.mode.as_str()))>
            {move || render_rows(projection.get(), on_open, on_tag_click)}
        </section>
    }
}

fn render_rows(projection: Projection, on_open: Callback<String>, on_tag_click: Callback<String>) -> impl IntoView {
    let Projection { mode, per_row, rows } = projection;
    rows.into_iter()
        .map(move |row| {
            let class = if row.sparse { "shelf-row sparse" } else { "shelf-row" };
            view! {
                <div class=class style=format!("--per-row: {}", per_row)>
                    {row.items.iter().map(|item| render_book(mode, item, on_open, on_tag_click)).collect_view()}
                    {(mode == ViewMode::Shelf).then(|| view! { <div class="shelf-board"></div> })}
                </div>
            }
        })
        .collect_view()
}

fn render_book(mode: ViewMode, item: &Item, on_open: Callback<String>, on_tag_click: Callback<String>) -> AnyView {
    match mode {
        ViewMode::Cover => view! {
            <BookCover book=BookProps::for_cover(item) on_click=on_open on_tag_click=on_tag_click />
        }.into_any(),
        ViewMode::Shelf => view! {
            <BookSpine book=BookProps::for_spine(item) on_click=on_open on_tag_click=on_tag_click />
        }.into_any(),
        ViewMode::Card => view! {
            <BookCard book=BookProps::for_card(item) on_click=on_open on_tag_click=on_tag_click />
        }.into_any(),
    }
}
