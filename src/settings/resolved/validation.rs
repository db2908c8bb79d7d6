use stacksearch::tui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, keys};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let has_host = ["http://", "https://"].iter().any(|scheme| {
		config
			.endpoint
			.strip_prefix(scheme)
			.is_some_and(|rest| !rest.is_empty())
	});
	if !has_host {
		return Err(ConfigError::invalid(
			keys::ENDPOINT,
			config.endpoint.clone(),
			sources.source_for_endpoint(),
			"must be an http:// or https:// URL",
		));
	}

	if config.timeout.is_zero() {
		return Err(ConfigError::invalid(
			keys::TIMEOUT,
			"0",
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.clear_delay.is_zero() {
		return Err(ConfigError::invalid(
			keys::CLEAR_DELAY,
			"0",
			sources.source_for_clear_delay(),
			"must be greater than zero",
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::invalid(
			keys::THEME,
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", theme::names().join(", ")),
		));
	}

	Ok(())
}
