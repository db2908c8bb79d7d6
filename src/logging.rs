//! Diagnostics plumbing.
//!
//! Everything logs through the `log` facade. Records are captured by
//! `tui-logger` so they can be shown inside the UI without corrupting the
//! alternate screen.

use std::sync::OnceLock;

use log::LevelFilter;

static INITIALIZED: OnceLock<bool> = OnceLock::new();

/// Install the in-memory logger. Safe to call more than once.
///
/// Returns `false` when another logger already owns the `log` facade.
pub fn initialize() -> bool {
	*INITIALIZED.get_or_init(|| {
		let installed = tui_logger::init_logger(LevelFilter::Trace).is_ok();
		if installed {
			tui_logger::set_default_level(LevelFilter::Debug);
		}
		installed
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_initialization_reports_the_same_result() {
		let first = initialize();
		assert_eq!(initialize(), first);
	}
}
