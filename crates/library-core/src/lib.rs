//! Library View Core
//!
//! Reconciles the remote collection of saved items with local view state:
//! - resolver: authenticated or anonymous data client
//! - fetch: sequence-numbered, debounced list fetching
//! - layout: column count, row projections, keyword filter
//! - view_state: state transitions and the host storage seam
//! - controller: the operations the view calls
//!
//! No browser dependencies; hosts inject the token provider, transport and timer.

mod config;
mod controller;
mod error;
mod fetch;
mod graphql;
mod models;
mod resolver;
mod transport;
mod view_state;

pub mod layout;
pub mod presentation;

pub use config::LibraryConfig;
pub use controller::LibraryController;
pub use error::{LibraryError, LibraryResult};
pub use fetch::{FetchCoordinator, Timer};
pub use graphql::{Client, GraphQlErrorEntry, GraphQlRequest, GraphQlResponse, HttpResponse, Transport};
pub use models::{FetchStatus, Item, ViewMode, ViewState};
pub use resolver::{ClientResolver, NoSession, TokenProvider};
pub use transport::HttpTransport;
pub use view_state::{normalize_keyword, StateHandle};
