use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Style, Stylize};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field backed by [`TextArea`].
///
/// Line breaks are never inserted; submit keys are left to the caller.
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.textarea.set_placeholder_text(placeholder);
		self
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key press. Returns whether the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if is_line_break(key) {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Show or hide the cursor depending on focus.
	pub fn set_focused(&mut self, focused: bool) {
		let style = if focused {
			Style::default().reversed()
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	#[must_use]
	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}

fn is_line_break(key: KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
