use std::time::{Duration, Instant};

use super::ClearTimer;
use crate::systems::search::SearchError;
use crate::types::{ResultCount, SearchQuery};

/// What an input edit asks the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
	/// The effective pair changed and names a non-empty query.
	Search(SearchQuery),
	/// The query is empty; the display clears at `deadline` unless superseded.
	ScheduleClear { deadline: Instant },
	/// Nothing the session needs to act on.
	Unchanged,
}

/// Owns the raw query text and result-count input.
///
/// Edits are evaluated immediately. Non-empty text cancels a pending clear
/// and asks for a search; empty text (re)arms the clear timer instead.
#[derive(Debug, Clone)]
pub struct InputController {
	text: String,
	raw_count: String,
	count: ResultCount,
	clear: ClearTimer,
}

impl InputController {
	#[must_use]
	pub fn new(count: ResultCount, clear_delay: Duration) -> Self {
		Self {
			text: String::new(),
			raw_count: count.to_string(),
			count,
			clear: ClearTimer::new(clear_delay),
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// The count text exactly as typed, which may not be valid.
	#[must_use]
	pub fn raw_count(&self) -> &str {
		&self.raw_count
	}

	/// The last valid count.
	#[must_use]
	pub fn result_count(&self) -> ResultCount {
		self.count
	}

	/// The effective `(text, count)` pair.
	#[must_use]
	pub fn query(&self) -> SearchQuery {
		SearchQuery::new(self.text.clone(), self.count)
	}

	#[must_use]
	pub fn clear_delay(&self) -> Duration {
		self.clear.delay()
	}

	#[must_use]
	pub fn clear_deadline(&self) -> Option<Instant> {
		self.clear.deadline()
	}

	pub fn set_query_text(&mut self, text: &str, now: Instant) -> Trigger {
		if text.is_empty() {
			self.text.clear();
			let deadline = self.clear.schedule(now);
			return Trigger::ScheduleClear { deadline };
		}

		if self.text == text {
			return Trigger::Unchanged;
		}

		self.text = text.to_string();
		self.clear.cancel();
		Trigger::Search(self.query())
	}

	/// Accept raw count text.
	///
	/// Invalid text is remembered for display but leaves the effective count
	/// untouched and is returned as [`SearchError::InvalidResultCount`].
	pub fn set_result_count(&mut self, raw: &str, now: Instant) -> Result<Trigger, SearchError> {
		self.raw_count = raw.to_string();
		let count = ResultCount::parse(raw)?;
		if count == self.count {
			return Ok(Trigger::Unchanged);
		}

		self.count = count;
		if self.text.is_empty() {
			let deadline = self.clear.schedule(now);
			return Ok(Trigger::ScheduleClear { deadline });
		}
		Ok(Trigger::Search(self.query()))
	}

	/// Ask for the current pair again without any edit.
	pub fn resubmit(&mut self) -> Trigger {
		if self.text.is_empty() {
			return Trigger::Unchanged;
		}
		self.clear.cancel();
		Trigger::Search(self.query())
	}

	/// Whether the debounced clear elapsed at `now`. Fires at most once per schedule.
	pub fn poll_clear(&mut self, now: Instant) -> bool {
		self.clear.fire_if_due(now)
	}
}

impl Default for InputController {
	fn default() -> Self {
		Self::new(ResultCount::default(), super::DEFAULT_CLEAR_DELAY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DELAY: Duration = Duration::from_millis(700);

	fn count(value: u32) -> ResultCount {
		ResultCount::new(value).unwrap()
	}

	#[test]
	fn non_empty_text_requests_a_search_for_the_current_pair() {
		let mut input = InputController::new(count(5), DELAY);
		let trigger = input.set_query_text("sorting algorithm", Instant::now());
		assert_eq!(
			trigger,
			Trigger::Search(SearchQuery::new("sorting algorithm", count(5)))
		);
	}

	#[test]
	fn empty_text_schedules_a_clear_instead_of_searching() {
		let now = Instant::now();
		let mut input = InputController::new(count(5), DELAY);
		input.set_query_text("x", now);

		assert_eq!(
			input.set_query_text("", now),
			Trigger::ScheduleClear {
				deadline: now + DELAY
			}
		);
		assert_eq!(input.clear_deadline(), Some(now + DELAY));
	}

	#[test]
	fn retyping_identical_text_is_unchanged() {
		let now = Instant::now();
		let mut input = InputController::new(count(5), DELAY);
		input.set_query_text("x", now);
		assert_eq!(input.set_query_text("x", now), Trigger::Unchanged);

		input.set_query_text("", now);
		assert!(matches!(input.set_query_text("x", now), Trigger::Search(_)));
		assert_eq!(input.clear_deadline(), None);
	}

	#[test]
	fn invalid_count_is_kept_raw_but_not_applied() {
		let now = Instant::now();
		let mut input = InputController::new(count(5), DELAY);
		input.set_query_text("rust", now);

		assert_eq!(
			input.set_result_count("-2", now),
			Err(SearchError::invalid_count("-2"))
		);
		assert_eq!(input.raw_count(), "-2");
		assert_eq!(input.result_count(), count(5));
		assert_eq!(input.query(), SearchQuery::new("rust", count(5)));
	}

	#[test]
	fn count_changes_search_only_when_text_is_present() {
		let now = Instant::now();
		let mut input = InputController::new(count(5), DELAY);

		assert!(matches!(
			input.set_result_count("10", now),
			Ok(Trigger::ScheduleClear { .. })
		));

		input.set_query_text("rust", now);
		assert_eq!(input.set_result_count("10", now), Ok(Trigger::Unchanged));
		assert_eq!(
			input.set_result_count(" 3", now),
			Ok(Trigger::Search(SearchQuery::new("rust", count(3))))
		);
	}

	#[test]
	fn resubmit_repeats_the_current_pair() {
		let now = Instant::now();
		let mut input = InputController::new(count(5), DELAY);
		assert_eq!(input.resubmit(), Trigger::Unchanged);

		input.set_query_text("rust", now);
		assert_eq!(
			input.resubmit(),
			Trigger::Search(SearchQuery::new("rust", count(5)))
		);
	}
}
