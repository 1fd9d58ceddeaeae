//! Host Page Bindings
//!
//! Browser implementations of the capabilities the library core asks for.

mod auth;
mod config;
mod timer;

pub use auth::HostTokens;
pub use config::load_config;
pub use timer::GlooTimer;
