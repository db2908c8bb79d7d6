use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	let _ = writeln!(out, "  Endpoint: {}", config.endpoint);
	let _ = writeln!(out, "  Timeout: {} ms", config.timeout.as_millis());
	let _ = writeln!(out, "  Result count: {}", config.result_count);
	let _ = writeln!(out, "  Clear delay: {} ms", config.clear_delay.as_millis());
	let _ = writeln!(
		out,
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	if let Some(title) = &config.title {
		let _ = writeln!(out, "  Title: {title}");
	}
	if !config.initial_query.is_empty() {
		let _ = writeln!(out, "  Initial query: {}", config.initial_query);
	}
	out
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use stacksearch::{DEFAULT_ENDPOINT, ResultCount};

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout: Duration::from_secs(10),
			result_count: ResultCount::default(),
			clear_delay: Duration::from_millis(700),
			initial_query: "quicksort".into(),
			theme: Some("light".into()),
			title: None,
		};

		insta::assert_snapshot!(format_summary(&config), @r"
		Effective configuration:
		  Endpoint: http://127.0.0.1:5000/getsearchresults
		  Timeout: 10000 ms
		  Result count: 5
		  Clear delay: 700 ms
		  UI theme: light
		  Initial query: quicksort
		");
	}
}
