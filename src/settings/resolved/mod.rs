use std::time::Duration;

use stacksearch::{ResultCount, SessionOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource, keys};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
	pub endpoint: String,
	pub timeout: Duration,
	pub result_count: ResultCount,
	pub clear_delay: Duration,
	pub initial_query: String,
	pub theme: Option<String>,
	pub title: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Session parameters for the interactive UI.
	pub fn session_options(&self) -> SessionOptions {
		SessionOptions {
			result_count: self.result_count,
			clear_delay: self.clear_delay,
		}
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		print!("{}", summary::format_summary(self));
	}
}
