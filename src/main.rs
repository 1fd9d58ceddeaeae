//! Shelf Frontend Entry Point

mod bindings;
mod context;
mod store;
mod responsive;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    mount_to_body(App);
}
