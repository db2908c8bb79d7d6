//! Core state container for the terminal front-end.

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use ratatui::widgets::ListState;
use log::LevelFilter;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::config::UiLabels;
use crate::session::{DisplayState, SearchSession, SessionOptions, ViewMode};
use crate::systems::search::{self, SearchBackend, SearchResponse};
use crate::tui::input::QueryInput;
use crate::tui::theme::Theme;
use crate::types::SearchResult;

mod search_runtime;

pub(crate) use search_runtime::SearchRuntime;

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.session.transport().shutdown();
	}
}

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Query,
	ResultCount,
}

impl Focus {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Query => Self::ResultCount,
			Self::ResultCount => Self::Query,
		}
	}
}

/// Aggregate state shared across the terminal UI.
///
/// The `App` owns the search session (input, request generations, display
/// state) and the widgets that edit and present it.
pub struct App<'a> {
	pub query_input: QueryInput<'a>,
	pub count_input: QueryInput<'a>,
	pub(crate) focus: Focus,
	pub(crate) list_state: ListState,
	pub(crate) labels: UiLabels,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_logs: bool,
	pub(crate) log_state: TuiWidgetState,
	pub(crate) session: SearchSession<SearchRuntime>,
	pub(crate) responses: Receiver<SearchResponse>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose searches run against `backend` on a worker thread.
	pub fn new(backend: Arc<dyn SearchBackend>, options: SessionOptions) -> Self {
		crate::logging::initialize();
		let (search_tx, responses, latest_query_id) = search::spawn(backend);
		let runtime = SearchRuntime::new(search_tx, latest_query_id);
		let labels = UiLabels::default();

		let query_input = QueryInput::new("").with_placeholder(labels.query_placeholder.clone());
		let count_input = QueryInput::new(options.result_count.to_string());

		let mut app = Self {
			query_input,
			count_input,
			focus: Focus::Query,
			list_state: ListState::default(),
			labels,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			show_logs: false,
			log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			session: SearchSession::new(runtime, options),
			responses,
		};
		app.apply_focus();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.query_input = QueryInput::new(self.query_input.text().to_string())
			.with_placeholder(labels.query_placeholder.clone());
		self.labels = labels;
		self.apply_focus();
	}

	/// Seed the query input. The search is issued when the UI starts.
	pub fn set_initial_query(&mut self, text: impl Into<String>) {
		self.query_input =
			QueryInput::new(text).with_placeholder(self.labels.query_placeholder.clone());
		self.apply_focus();
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub(crate) fn toggle_focus(&mut self) {
		self.focus = self.focus.toggled();
		self.apply_focus();
	}

	fn apply_focus(&mut self) {
		self.query_input.set_focused(self.focus == Focus::Query);
		self.count_input.set_focused(self.focus == Focus::ResultCount);
	}

	#[must_use]
	pub(crate) fn session(&self) -> &SearchSession<SearchRuntime> {
		&self.session
	}

	/// What the render surface currently shows.
	#[must_use]
	pub fn display(&self) -> &DisplayState {
		self.session().display()
	}

	#[must_use]
	pub fn view_mode(&self) -> ViewMode {
		self.session().view_mode()
	}

	/// The result under the selection cursor, if any.
	#[must_use]
	pub fn selected_result(&self) -> Option<&SearchResult> {
		let index = self.list_state.selected()?;
		self.session.display().results.get(index)
	}

	pub(crate) fn reset_selection(&mut self) {
		let selection = if self.session.display().results.is_empty() {
			None
		} else {
			Some(0)
		};
		self.list_state.select(selection);
	}

	pub(crate) fn move_selection_up(&mut self) {
		if let Some(selected) = self.list_state.selected() {
			if selected > 0 {
				self.list_state.select(Some(selected - 1));
			}
		}
	}

	pub(crate) fn move_selection_down(&mut self) {
		let len = self.session.display().results.len();
		match self.list_state.selected() {
			Some(selected) if selected + 1 < len => self.list_state.select(Some(selected + 1)),
			None if len > 0 => self.list_state.select(Some(0)),
			_ => {}
		}
	}
}
