use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use log::trace;

use super::App;
use crate::session::Disposition;
use crate::systems::search::SearchResponse;

impl<'a> App<'a> {
	/// Forward the query input to the session.
	pub(crate) fn submit_query_text(&mut self, now: Instant) {
		let text = self.query_input.text().to_string();
		self.session.set_query_text(&text, now);
	}

	/// Forward the result-count input to the session.
	pub(crate) fn submit_result_count(&mut self, now: Instant) {
		let raw = self.count_input.text().to_string();
		self.session.set_result_count(&raw, now);
	}

	/// Drain any search responses waiting on the receiver channel.
	pub(crate) fn pump_search_results(&mut self) {
		loop {
			match self.responses.try_recv() {
				Ok(response) => self.handle_search_response(response),
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	/// Apply a response if it belongs to the most recent request.
	fn handle_search_response(&mut self, response: SearchResponse) {
		let SearchResponse { id, query, outcome } = response;
		trace!("response #{id} arrived for '{}'", query.text);
		if self.session.apply_response(id, outcome) == Disposition::Applied {
			self.reset_selection();
		}
	}

	/// Advance time-driven state such as the debounced clear.
	pub(crate) fn tick(&mut self, now: Instant) {
		if self.session.tick(now) {
			self.list_state.select(None);
		}
	}
}
