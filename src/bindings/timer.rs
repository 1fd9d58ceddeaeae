use std::time::Duration;

use async_trait::async_trait;
use library_core::Timer;

/// Debounce timer on the browser event loop
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
