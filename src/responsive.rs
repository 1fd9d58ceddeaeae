//! Viewport Tracking
//!
//! Feeds the window width into the library view for as long as it is mounted.

use leptos::ev;
use leptos::prelude::*;

use crate::context::LibraryContext;

/// Current window width in CSS pixels, 0 when unavailable
pub fn viewport_width() -> f64 {
    window().inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0)
}

/// Subscribe to window resizes; the listener is removed when the owner is cleaned up
pub fn track_viewport(ctx: LibraryContext) {
    let handle = window_event_listener(ev::resize, move |_| {
        ctx.resize(viewport_width());
    });
    on_cleanup(move || handle.remove());
}
