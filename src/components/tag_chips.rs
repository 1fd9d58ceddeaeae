//! Tag Chips Component

use leptos::prelude::*;

/// Up to three tags plus a "+N" marker for the rest
#[component]
pub fn TagChips(
    tags: Vec<String>,
    hidden: usize,
    #[prop(optional_no_strip)] on_tag_click: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="tag-chips">
            {tags.into_iter().map(move |tag| {
                let label = tag.clone();
                view! {
                    <button
                        type="button"
                        class="tag-chip"
                        on:click=move |ev| {
                            // Tag clicks must not open the book underneath
                            ev.stop_propagation();
                            if let Some(cb) = on_tag_click {
                                cb.run(tag.clone());
                            }
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
            {(hidden > 0).then(|| view! { <span class="tag-more">{format!("+{}", hidden)}</span> })}
        </div>
    }
}
