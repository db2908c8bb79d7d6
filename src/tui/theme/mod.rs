//! Colour themes for the terminal UI.

mod builtins;

use ratatui::style::Style;

pub use builtins::{LIGHT, SLATE, SOLARIZED};

/// Styles applied by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	/// Emphasised body words (query matches).
	pub highlight: Style,
	pub tag: Style,
	pub link: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn tag_style(&self) -> Style {
		self.tag
	}

	#[must_use]
	pub fn link_style(&self) -> Style {
		self.link
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const BUILT_IN: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["default", "dark"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &[],
	},
	ThemeDefinition {
		name: "solarized",
		theme: SOLARIZED,
		aliases: &["solarized-dark"],
	},
];

/// Names of the built-in themes, without aliases.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|definition| definition.name).collect()
}

/// Look up a theme by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = name.trim().to_ascii_lowercase();
	BUILT_IN
		.iter()
		.find(|definition| {
			definition.name == normalized
				|| definition.aliases.iter().any(|alias| *alias == normalized)
		})
		.map(|definition| definition.theme)
}
