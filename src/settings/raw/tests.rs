use clap::Parser;

use super::*;

fn cli(args: &[&str]) -> CliArgs {
	let mut full = vec!["stacksearch"];
	full.extend_from_slice(args);
	CliArgs::parse_from(full)
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = cli(&[
		"--endpoint",
		"https://example.com/search",
		"--timeout-ms",
		"1500",
		"-n",
		"9",
		"--clear-delay-ms",
		"250",
		"-q",
		"merge sort",
		"--theme",
		"light",
		"-t",
		"Ask",
	]);

	let mut config = RawConfig::default();
	config.search.result_count = Some("2".into());
	config.ui.theme = Some("slate".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.backend.endpoint.as_deref(), Some("https://example.com/search"));
	assert_eq!(config.backend.timeout_ms, Some(1500));
	assert_eq!(config.search.result_count.as_deref(), Some("9"));
	assert_eq!(config.search.clear_delay_ms, Some(250));
	assert_eq!(config.search.initial_query.as_deref(), Some("merge sort"));
	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.title.as_deref(), Some("Ask"));
}

#[test]
fn sources_prefer_cli_over_environment() {
	let cli = cli(&["--theme", "light"]);
	let env: EnvMap = [
		("STACKSEARCH__UI__THEME".to_string(), "slate".to_string()),
		("STACKSEARCH__BACKEND__ENDPOINT".to_string(), "x".to_string()),
	]
	.into_iter()
	.collect();

	let sources = RawConfig::default().sources(&cli, &env);
	assert_eq!(sources.theme, Some(SettingSource::CliFlag("--theme")));
	assert_eq!(
		sources.endpoint,
		Some(SettingSource::Environment("STACKSEARCH__BACKEND__ENDPOINT"))
	);
	assert_eq!(sources.result_count, None);
}

#[test]
fn blank_theme_and_title_fall_back_to_defaults() {
	let mut config = RawConfig::default();
	config.ui.theme = Some("  ".into());
	config.ui.title = Some(String::new());
	let resolved = config.resolve(&ConfigSources::default()).expect("resolves");
	assert!(resolved.theme.is_none());
	assert!(resolved.title.is_none());
}

#[test]
fn count_text_is_trimmed() {
	let mut config = RawConfig::default();
	config.search.result_count = Some(" 7 ".into());
	let resolved = config.resolve(&ConfigSources::default()).expect("resolves");
	assert_eq!(resolved.result_count.get(), 7);
}
