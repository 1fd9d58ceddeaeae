//! Save Item Form Component
//!
//! Paste text to add it to the library. The shelves reload after a save.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_library;
use crate::store::{use_app_store, AppStateStoreFields, SaveStateStoreFields};

#[component]
pub fn SaveItemForm() -> impl IntoView {
    let ctx = use_library();
    let store = use_app_store();

    let (content, set_content) = signal(String::new());
    let saving = move || store.save().saving().get();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving() {
            return;
        }
        let text = content.get_untracked();
        let controller = ctx.controller();

        store.save().saving().set(true);
        store.save().message().set(None);

        spawn_local(async move {
            let message = match controller.save(&text).await {
                Ok(saved) => {
                    set_content.set(String::new());
                    format!("Saved \"{}\"", saved.title)
                }
                Err(err) => {
                    log::warn!("[SAVE] {}", err);
                    err.user_message()
                }
            };
            store.save().saving().set(false);
            store.save().message().set(Some(message));
        });
    };

    view! {
        <form class="save-item-form" on:submit=submit>
            <h2>"Add to library"</h2>
            <textarea
                placeholder="Paste an article, note or snippet..."
                rows="6"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                disabled=move || saving() || content.with(|c| c.trim().is_empty())
            >
                {move || if saving() { "Saving..." } else { "Save" }}
            </button>
            {move || store.save().message().get().map(|m| view! { <p class="save-message">{m}</p> })}
        </form>
    }
}
