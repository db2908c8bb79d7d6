//! Interactive terminal UI for `stacksearch`.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, key handling, rendering and
//! the glue between the [`App`] and its search session.

mod actions;
mod builder;
mod config;
mod render;
mod runtime;
mod search;
mod state;

pub use builder::SearchUi;
pub use config::UiLabels;
pub use state::{App, Focus};
