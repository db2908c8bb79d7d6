use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};
use crate::types::SearchOutcome;

impl<'a> App<'a> {
	/// Handle a key press. Returns the outcome once the user is done.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		self.handle_key_at(key, Instant::now())
	}

	pub(crate) fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<SearchOutcome> {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Some(self.cancelled()),
			KeyCode::Char('c') if control => return Some(self.cancelled()),
			KeyCode::Enter => {
				let selection = self.selected_result().cloned();
				return Some(SearchOutcome::accepted(
					self.query_input.text(),
					selection,
				));
			}
			KeyCode::Char('r') if control => self.session.resubmit(),
			KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
			KeyCode::F(2) => self.show_logs = !self.show_logs,
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => match self.focus {
				Focus::Query => {
					if self.query_input.input(key) {
						self.submit_query_text(now);
					}
				}
				Focus::ResultCount => {
					if self.count_input.input(key) {
						self.submit_result_count(now);
					}
				}
			},
		}
		None
	}

	fn cancelled(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.query_input.text())
	}
}
