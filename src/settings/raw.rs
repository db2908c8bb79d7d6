use std::time::Duration;

use serde::Deserialize;
use stacksearch::{DEFAULT_ENDPOINT, ResultCount};

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource, keys};
use super::sources::EnvMap;

#[cfg(test)]
mod tests;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CLEAR_DELAY_MS: u64 = 700;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	backend: BackendSection,
	search: SearchSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BackendSection {
	endpoint: Option<String>,
	timeout_ms: Option<u64>,
}

/// Search parameters. The count stays textual until resolution so a bad
/// value can be reported with its origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
	result_count: Option<String>,
	clear_delay_ms: Option<u64>,
	initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.backend.endpoint = Some(endpoint);
		}
		if let Some(value) = cli.timeout_ms {
			self.backend.timeout_ms = Some(value);
		}
		if let Some(count) = cli.num_results.clone() {
			self.search.result_count = Some(count);
		}
		if let Some(value) = cli.clear_delay_ms {
			self.search.clear_delay_ms = Some(value);
		}
		if let Some(query) = cli.query.clone() {
			self.search.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
	}

	/// Record which layer supplied each validated setting.
	pub(super) fn sources(&self, cli: &CliArgs, env: &EnvMap) -> ConfigSources {
		let origin = |flag_set: bool, flag: &'static str, var: &'static str| {
			if flag_set {
				Some(SettingSource::CliFlag(flag))
			} else if env.contains_key(var) {
				Some(SettingSource::Environment(var))
			} else {
				None
			}
		};

		ConfigSources {
			endpoint: origin(
				cli.endpoint.is_some(),
				"--endpoint",
				"STACKSEARCH__BACKEND__ENDPOINT",
			),
			timeout: origin(
				cli.timeout_ms.is_some(),
				"--timeout-ms",
				"STACKSEARCH__BACKEND__TIMEOUT_MS",
			),
			result_count: origin(
				cli.num_results.is_some(),
				"--num-results",
				"STACKSEARCH__SEARCH__RESULT_COUNT",
			),
			clear_delay: origin(
				cli.clear_delay_ms.is_some(),
				"--clear-delay-ms",
				"STACKSEARCH__SEARCH__CLEAR_DELAY_MS",
			),
			theme: origin(cli.theme.is_some(), "--theme", "STACKSEARCH__UI__THEME"),
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
		let result_count = match self.search.result_count {
			Some(raw) => ResultCount::parse(&raw).map_err(|err| {
				ConfigError::invalid(
					keys::RESULT_COUNT,
					raw.clone(),
					sources.source_for_result_count(),
					err.to_string(),
				)
			})?,
			None => ResultCount::default(),
		};

		let resolved = ResolvedConfig {
			endpoint: self
				.backend
				.endpoint
				.map(|endpoint| endpoint.trim().to_string())
				.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
			timeout: Duration::from_millis(self.backend.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
			result_count,
			clear_delay: Duration::from_millis(
				self.search.clear_delay_ms.unwrap_or(DEFAULT_CLEAR_DELAY_MS),
			),
			initial_query: self.search.initial_query.unwrap_or_default(),
			theme: self.ui.theme.filter(|theme| !theme.trim().is_empty()),
			title: self.ui.title.filter(|title| !title.trim().is_empty()),
		};

		resolved.validate(sources)?;
		Ok(resolved)
	}
}
