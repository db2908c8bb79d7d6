//! Core crate exports for building and running the `stacksearch` terminal interface.
//!
//! The search session (input debouncing, request generations, display state)
//! is independent of any terminal; the UI and the HTTP backend plug into it
//! through the [`session::Transport`] and [`SearchBackend`] seams.

pub mod app_dirs;
pub mod logging;
pub mod sanitize;
pub mod session;
mod systems;
pub mod tui;
pub mod types;
pub mod ui;

pub use session::{DisplayState, SearchSession, SessionOptions, ViewMode};
pub use systems::search::{
	DEFAULT_ENDPOINT, HttpBackend, SearchBackend, SearchError, SearchPayload,
};
pub use tui::theme::Theme;
pub use types::{ResultCount, SearchOutcome, SearchQuery, SearchResult, TagSet};
pub use ui::{SearchUi, UiLabels};
