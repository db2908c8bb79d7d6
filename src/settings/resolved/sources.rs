use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the settings that can fail validation. `None` means a config
/// file or the built-in default supplied the value.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) endpoint: Option<SettingSource>,
	pub(crate) timeout: Option<SettingSource>,
	pub(crate) result_count: Option<SettingSource>,
	pub(crate) clear_delay: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_endpoint(&self) -> SettingSource {
		self.endpoint
			.clone()
			.unwrap_or(SettingSource::ConfigKey(keys::ENDPOINT))
	}

	pub(crate) fn source_for_timeout(&self) -> SettingSource {
		self.timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey(keys::TIMEOUT))
	}

	pub(crate) fn source_for_result_count(&self) -> SettingSource {
		self.result_count
			.clone()
			.unwrap_or(SettingSource::ConfigKey(keys::RESULT_COUNT))
	}

	pub(crate) fn source_for_clear_delay(&self) -> SettingSource {
		self.clear_delay
			.clone()
			.unwrap_or(SettingSource::ConfigKey(keys::CLEAR_DELAY))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey(keys::THEME))
	}
}

/// Dotted configuration keys.
pub(crate) mod keys {
	pub(crate) const ENDPOINT: &str = "backend.endpoint";
	pub(crate) const TIMEOUT: &str = "backend.timeout_ms";
	pub(crate) const RESULT_COUNT: &str = "search.result_count";
	pub(crate) const CLEAR_DELAY: &str = "search.clear_delay_ms";
	pub(crate) const THEME: &str = "ui.theme";
}
