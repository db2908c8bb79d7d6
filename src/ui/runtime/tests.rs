use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use crate::session::{SessionOptions, ViewMode};
use crate::systems::search::{SearchBackend, SearchError, SearchPayload};
use crate::types::{SearchQuery, SearchResult};
use crate::ui::{App, Focus};

/// Answers every query with two canned questions and records what it saw.
#[derive(Default)]
struct CannedBackend {
	seen: Mutex<Vec<(String, u32)>>,
}

impl CannedBackend {
	fn seen(&self) -> Vec<(String, u32)> {
		self.seen.lock().unwrap().clone()
	}
}

impl SearchBackend for CannedBackend {
	fn search(&self, query: &SearchQuery) -> Result<SearchPayload, SearchError> {
		self.seen
			.lock()
			.unwrap()
			.push((query.text.clone(), query.result_count.get()));
		Ok(SearchPayload {
			tags: vec!["python".to_string(), "sorting".to_string()],
			results: vec![
				SearchResult {
					title: "How do I sort a list?".to_string(),
					body_html: "Use <b style='color: #464646'>sorted</b>".to_string(),
					url: "https://stackoverflow.com/q/1".to_string(),
					votes: 42,
					similarity_score: 0.91,
				},
				SearchResult {
					title: "Sort a dict by value".to_string(),
					body_html: "<p>Try <code>sorted(d.items())</code></p>".to_string(),
					url: "https://stackoverflow.com/q/2".to_string(),
					votes: 7,
					similarity_score: 0.74,
				},
			],
		})
	}
}

fn app_with(backend: Arc<CannedBackend>) -> App<'static> {
	App::new(backend, SessionOptions::default())
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App<'_>, text: &str, now: Instant) {
	for ch in text.chars() {
		assert!(app.handle_key_at(key(KeyCode::Char(ch)), now).is_none());
	}
}

fn wait_until_settled(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(2);
	while Instant::now() < deadline {
		app.pump_search_results();
		if !app.session().is_pending() {
			return;
		}
		thread::sleep(Duration::from_millis(5));
	}
	panic!("search never settled");
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
	terminal.draw(|frame| app.draw(frame)).unwrap();
	terminal.backend().to_string()
}

#[test]
fn typing_populates_results_and_tags() {
	let backend = Arc::new(CannedBackend::default());
	let mut app = app_with(Arc::clone(&backend));
	type_text(&mut app, "sort", Instant::now());
	wait_until_settled(&mut app);

	assert_eq!(app.view_mode(), ViewMode::Populated);
	assert_eq!(app.display().tags, vec!["python", "sorting"]);
	assert_eq!(
		app.selected_result().map(|result| result.votes),
		Some(42)
	);
	let last = backend.seen().last().cloned();
	assert_eq!(last, Some(("sort".to_string(), 5)));

	let view = render(&mut app, 80, 24);
	assert!(view.contains("How do I sort a list?"), "{view}");
	assert!(view.contains("[python] [sorting]"), "{view}");
	assert!(view.contains("https://stackoverflow.com/q/2"), "{view}");
	assert!(view.contains("Use sorted"), "{view}");
}

#[test]
fn landing_page_shows_banner_and_inputs() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	assert_eq!(app.view_mode(), ViewMode::Landing);

	let view = render(&mut app, 80, 20);
	assert!(view.contains("StackSearch"), "{view}");
	assert!(view.contains("Search Query"), "{view}");
	assert!(view.contains("No. of results"), "{view}");
	assert!(!view.contains("Predicted Tags"), "{view}");
}

#[test]
fn emptied_query_returns_to_landing_after_delay() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	let start = Instant::now();
	type_text(&mut app, "a", start);
	wait_until_settled(&mut app);
	assert_eq!(app.view_mode(), ViewMode::Populated);

	app.handle_key_at(key(KeyCode::Backspace), start);
	app.tick(start + Duration::from_millis(699));
	assert_eq!(app.view_mode(), ViewMode::Populated);

	app.tick(start + Duration::from_millis(700));
	assert_eq!(app.view_mode(), ViewMode::Landing);
	assert!(app.display().results.is_empty());
	assert!(app.selected_result().is_none());
}

#[test]
fn selection_moves_within_results() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	type_text(&mut app, "dict", Instant::now());
	wait_until_settled(&mut app);

	app.handle_key_at(key(KeyCode::Up), Instant::now());
	assert_eq!(app.selected_result().map(|result| result.votes), Some(42));
	app.handle_key_at(key(KeyCode::Down), Instant::now());
	app.handle_key_at(key(KeyCode::Down), Instant::now());
	assert_eq!(app.selected_result().map(|result| result.votes), Some(7));
}

#[test]
fn enter_accepts_selected_result() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	type_text(&mut app, "sort", Instant::now());
	wait_until_settled(&mut app);

	let outcome = app
		.handle_key_at(key(KeyCode::Enter), Instant::now())
		.expect("enter finishes the session");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "sort");
	assert_eq!(
		outcome.selection.map(|result| result.url),
		Some("https://stackoverflow.com/q/1".to_string())
	);
}

#[test]
fn escape_cancels() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	type_text(&mut app, "x", Instant::now());

	let outcome = app
		.handle_key_at(key(KeyCode::Esc), Instant::now())
		.expect("escape finishes the session");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query, "x");
	assert!(outcome.selection.is_none());
}

#[test]
fn invalid_count_is_never_sent() {
	let backend = Arc::new(CannedBackend::default());
	let mut app = app_with(Arc::clone(&backend));
	let now = Instant::now();
	type_text(&mut app, "sort", now);
	wait_until_settled(&mut app);
	let sent_before = backend.seen().len();

	app.handle_key_at(key(KeyCode::Tab), now);
	assert_eq!(app.focus(), Focus::ResultCount);
	app.handle_key_at(key(KeyCode::Backspace), now);
	type_text(&mut app, "x", now);
	wait_until_settled(&mut app);
	assert_eq!(backend.seen().len(), sent_before);

	app.handle_key_at(key(KeyCode::Backspace), now);
	type_text(&mut app, "3", now);
	wait_until_settled(&mut app);
	assert_eq!(backend.seen().last().cloned(), Some(("sort".to_string(), 3)));
}

#[test]
fn ctrl_r_resends_the_current_query() {
	let backend = Arc::new(CannedBackend::default());
	let mut app = app_with(Arc::clone(&backend));
	type_text(&mut app, "go", Instant::now());
	wait_until_settled(&mut app);
	let sent_before = backend.seen().len();

	let resubmit = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
	assert!(app.handle_key_at(resubmit, Instant::now()).is_none());
	wait_until_settled(&mut app);
	assert_eq!(backend.seen().len(), sent_before + 1);
	assert_eq!(app.view_mode(), ViewMode::Populated);
}

#[test]
fn initial_query_is_submitted_on_start() {
	let backend = Arc::new(CannedBackend::default());
	let mut app = app_with(Arc::clone(&backend));
	app.set_initial_query("binary search");
	app.submit_initial_query();
	wait_until_settled(&mut app);
	assert_eq!(
		backend.seen(),
		vec![("binary search".to_string(), 5)]
	);
}

#[test]
fn builder_applies_title_theme_and_query() {
	use crate::tui::theme::LIGHT;
	use crate::ui::SearchUi;

	let mut app = SearchUi::new(Arc::new(CannedBackend::default()))
		.with_title("Ask the archive")
		.with_theme_name("light")
		.with_theme_name("no-such-theme")
		.with_initial_query("")
		.build();
	assert_eq!(app.theme, LIGHT);
	assert_eq!(app.query_input.text(), "");

	let view = render(&mut app, 80, 20);
	assert!(view.contains("Ask the archive"), "{view}");
}

#[test]
fn stopped_worker_does_not_leave_the_view_loading() {
	let mut app = app_with(Arc::new(CannedBackend::default()));
	app.session().transport().shutdown();

	// The worker exits asynchronously; once it has, every send fails at once.
	let deadline = Instant::now() + Duration::from_secs(2);
	loop {
		type_text(&mut app, "x", Instant::now());
		if !app.session().is_pending() {
			break;
		}
		assert!(Instant::now() < deadline, "session stayed pending");
		thread::sleep(Duration::from_millis(5));
	}
	assert_eq!(app.view_mode(), ViewMode::Empty);
}

#[test]
fn whitespace_initial_query_is_sent_like_typed_text() {
	let backend = Arc::new(CannedBackend::default());
	let mut app = app_with(Arc::clone(&backend));
	app.set_initial_query(" ");
	app.submit_initial_query();
	wait_until_settled(&mut app);
	assert_eq!(backend.seen(), vec![(" ".to_string(), 5)]);

	type_text(&mut app, " ", Instant::now());
	wait_until_settled(&mut app);
	assert_eq!(backend.seen().last().cloned(), Some(("  ".to_string(), 5)));
}
