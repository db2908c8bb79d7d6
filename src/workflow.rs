use std::sync::Arc;

use anyhow::{Context, Result, bail};
use stacksearch::{
	HttpBackend, SearchBackend, SearchOutcome, SearchPayload, SearchQuery, SearchUi,
	SessionOptions,
};

use crate::settings::ResolvedConfig;

/// Coordinates building and running a search, interactive or one-shot.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	backend: Arc<dyn SearchBackend>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let backend = HttpBackend::new(config.endpoint.clone(), config.timeout)
			.context("failed to build the HTTP client")?;
		Ok(Self {
			config,
			backend: Arc::new(backend),
		})
	}

	/// Run the terminal UI until the user accepts or cancels.
	pub(crate) fn run(self) -> Result<SearchOutcome> {
		SearchUiFactory::build(self.config, self.backend).run()
	}

	/// Perform a single blocking search for the configured query.
	pub(crate) fn run_once(self) -> Result<(SearchQuery, SearchPayload)> {
		let query = SearchQuery::new(self.config.initial_query.as_str(), self.config.result_count);
		if query.is_empty() {
			bail!("--once needs a non-empty --query");
		}
		let payload = self
			.backend
			.search(&query)
			.with_context(|| format!("search for '{}' failed", query.text))?;
		Ok((query, payload))
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig, backend: Arc<dyn SearchBackend>) -> SearchUi {
		let options = config.session_options();
		let ResolvedConfig {
			initial_query,
			theme,
			title,
			..
		} = config;

		Self::new(backend, options)
			.with_initial_query(initial_query)
			.with_theme(theme)
			.with_title(title)
			.finish()
	}

	fn new(backend: Arc<dyn SearchBackend>, options: SessionOptions) -> Self {
		let search_ui = SearchUi::new(backend).with_options(options);
		Self { search_ui }
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.search_ui = self.search_ui.with_initial_query(query);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.search_ui = self.search_ui.with_theme_name(&theme);
		}
		self
	}

	fn with_title(mut self, title: Option<String>) -> Self {
		if let Some(title) = title {
			self.search_ui = self.search_ui.with_title(title);
		}
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
