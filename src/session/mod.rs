//! Query-driven search session: the logic between keystrokes and display state.
//!
//! [`InputController`] decides when an edit warrants a request,
//! [`RequestTracker`] numbers requests so only the latest response is applied,
//! and [`SearchSession`] ties both to the [`DisplayState`] the UI draws.
//! Nothing here performs I/O; requests leave through a [`Transport`] and
//! responses come back through [`SearchSession::apply_response`].

mod clear;
mod display;
mod input;
mod tracker;


use std::time::{Duration, Instant};

use log::{debug, warn};

pub use clear::{ClearTimer, DEFAULT_CLEAR_DELAY};
pub use display::{DisplayState, ViewMode};
pub use input::{InputController, Trigger};
pub use tracker::RequestTracker;

use crate::systems::search::{SearchError, SearchPayload};
use crate::types::{ResultCount, SearchQuery};

/// A request handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
	pub id: u64,
	pub query: SearchQuery,
}

/// Carries issued requests to whatever performs them.
pub trait Transport {
	/// Hand `ticket` off. An error means no response will ever arrive for it.
	fn dispatch(&mut self, ticket: SearchTicket) -> Result<(), SearchError>;
}

/// Where the session is in its request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
	Idle,
	Pending { id: u64 },
	Fulfilled,
	Failed,
}

/// How an arriving response was handled.
#[derive(Debug, Clone, PartialEq)]
pub enum Disposition {
	Applied,
	/// A newer request was issued (or the display was cleared) in the meantime.
	Stale,
	Failed(SearchError),
}

/// Tunables for a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
	pub result_count: ResultCount,
	pub clear_delay: Duration,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			result_count: ResultCount::default(),
			clear_delay: DEFAULT_CLEAR_DELAY,
		}
	}
}

/// Owns input, request generations and display state for one widget.
pub struct SearchSession<T> {
	input: InputController,
	tracker: RequestTracker,
	display: DisplayState,
	phase: SessionPhase,
	transport: T,
}

impl<T: Transport> SearchSession<T> {
	pub fn new(transport: T, options: SessionOptions) -> Self {
		Self {
			input: InputController::new(options.result_count, options.clear_delay),
			tracker: RequestTracker::default(),
			display: DisplayState::default(),
			phase: SessionPhase::Idle,
			transport,
		}
	}

	pub fn set_query_text(&mut self, text: &str, now: Instant) {
		let trigger = self.input.set_query_text(text, now);
		self.apply_trigger(trigger);
	}

	pub fn set_result_count(&mut self, raw: &str, now: Instant) {
		match self.input.set_result_count(raw, now) {
			Ok(trigger) => self.apply_trigger(trigger),
			Err(err) => warn!(
				"{err}; keeping result count {}",
				self.input.result_count()
			),
		}
	}

	/// Issue the current pair again, e.g. to refresh after a failure.
	pub fn resubmit(&mut self) {
		let trigger = self.input.resubmit();
		self.apply_trigger(trigger);
	}

	fn apply_trigger(&mut self, trigger: Trigger) {
		match trigger {
			Trigger::Search(query) => {
				self.display.is_active = true;
				self.issue_search(query);
			}
			Trigger::ScheduleClear { .. } => {
				debug!("query emptied; clearing in {:?}", self.clear_delay());
			}
			Trigger::Unchanged => {}
		}
	}

	/// Send `query` to the transport, superseding every earlier request.
	///
	/// Empty queries are never sent.
	pub fn issue_search(&mut self, query: SearchQuery) {
		if query.is_empty() {
			return;
		}
		let id = self.tracker.issue();
		self.phase = SessionPhase::Pending { id };
		debug!(
			"issuing request #{id} for '{}' ({} results)",
			query.text, query.result_count
		);
		if let Err(err) = self.transport.dispatch(SearchTicket { id, query }) {
			warn!("request #{id} could not be sent: {err}");
			self.tracker.complete(id);
			self.phase = SessionPhase::Failed;
		}
	}

	/// Reconcile a response with the display, discarding stale ones.
	pub fn apply_response(
		&mut self,
		id: u64,
		outcome: Result<SearchPayload, SearchError>,
	) -> Disposition {
		if !self.tracker.is_latest(id) {
			debug!("discarding stale response #{id}");
			return Disposition::Stale;
		}
		self.tracker.complete(id);

		match outcome {
			Ok(payload) => {
				debug!(
					"applying response #{id}: {} results, {} tags",
					payload.results.len(),
					payload.tags.len()
				);
				self.display.tags = payload.tags;
				self.display.results = payload.results;
				self.phase = SessionPhase::Fulfilled;
				Disposition::Applied
			}
			Err(err) => {
				warn!("request #{id} failed: {err}");
				self.phase = SessionPhase::Failed;
				Disposition::Failed(err)
			}
		}
	}

	/// Run the debounced clear if it is due. Returns whether the display reset.
	pub fn tick(&mut self, now: Instant) -> bool {
		if !self.input.poll_clear(now) {
			return false;
		}
		self.tracker.supersede_all();
		self.display.reset();
		self.phase = SessionPhase::Idle;
		debug!("display cleared");
		true
	}

	#[must_use]
	pub fn display(&self) -> &DisplayState {
		&self.display
	}

	#[must_use]
	pub fn input(&self) -> &InputController {
		&self.input
	}

	#[must_use]
	pub fn phase(&self) -> SessionPhase {
		self.phase
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.tracker.is_in_flight()
	}

	#[must_use]
	pub fn view_mode(&self) -> ViewMode {
		ViewMode::derive(&self.display, self.is_pending())
	}

	#[must_use]
	pub fn clear_delay(&self) -> Duration {
		self.input.clear_delay()
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}
}
