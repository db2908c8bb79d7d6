use std::sync::Arc;

use anyhow::Result;

use super::{App, UiLabels};
use crate::session::SessionOptions;
use crate::systems::search::SearchBackend;
use crate::tui::theme::{self, Theme};
use crate::types::SearchOutcome;

/// A small builder for configuring the interactive search UI before running it.
pub struct SearchUi {
	backend: Arc<dyn SearchBackend>,
	options: SessionOptions,
	initial_query: Option<String>,
	theme: Option<Theme>,
	labels: UiLabels,
}

impl SearchUi {
	/// Create a new search UI that queries `backend`.
	pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
		Self {
			backend,
			options: SessionOptions::default(),
			initial_query: None,
			theme: None,
			labels: UiLabels::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: SessionOptions) -> Self {
		self.options = options;
		self
	}

	/// Pre-fill the query box; the search runs as soon as the UI starts.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		let query = query.into();
		self.initial_query = (!query.is_empty()).then_some(query);
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Select a built-in theme. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.labels = self.labels.with_title(title);
		self
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.backend, self.options);
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.set_initial_query(query);
		}
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build();
		app.run()
	}
}
