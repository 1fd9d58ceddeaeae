//! Book Spine Component
//!
//! Narrow spine for the shelf view. Height grows with the tag count.

use leptos::prelude::*;
use library_core::presentation::BookProps;

#[component]
pub fn BookSpine(
    book: BookProps,
    #[prop(optional, into)] on_click: Option<Callback<String>>,
    #[prop(optional, into)] on_tag_click: Option<Callback<String>>,
) -> impl IntoView {
    let BookProps { id, title, tags, color, spine_height, .. } = book;
    let first_tag = tags.into_iter().next();

    let tooltip = title.clone();

    view! {
        <div
            class=format!("book-spine cover-{} spine-{}", color, spine_height.as_str())
            title=tooltip
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(id.clone());
                }
            }
        >
            <span class="spine-title">{title}</span>
            {first_tag.map(|tag| {
                let label = tag.clone();
                view! {
                    <span
                        class="spine-tag"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if let Some(cb) = on_tag_click {
                                cb.run(tag.clone());
                            }
                        }
                    >
                        {label}
                    </span>
                }
            })}
        </div>
    }
}
