/// Hands out request generations and remembers which one is current.
///
/// Generations only ever grow. A response may touch display state only when
/// its generation is still the latest one issued.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
	next_id: u64,
	latest: Option<u64>,
	in_flight: bool,
}

impl RequestTracker {
	/// Allocate the generation for a new request, superseding all earlier ones.
	pub fn issue(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.latest = Some(self.next_id);
		self.in_flight = true;
		self.next_id
	}

	/// Invalidate every outstanding request without issuing a new one.
	pub fn supersede_all(&mut self) {
		self.latest = None;
		self.in_flight = false;
	}

	#[must_use]
	pub fn is_latest(&self, id: u64) -> bool {
		self.latest == Some(id)
	}

	/// Record that the latest request produced its response.
	pub fn complete(&mut self, id: u64) {
		if self.is_latest(id) {
			self.in_flight = false;
		}
	}

	#[must_use]
	pub fn latest(&self) -> Option<u64> {
		self.latest
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn newer_generations_supersede_older_ones() {
		let mut tracker = RequestTracker::default();
		let first = tracker.issue();
		let second = tracker.issue();

		assert!(second > first);
		assert!(!tracker.is_latest(first));
		assert!(tracker.is_latest(second));
		assert!(tracker.is_in_flight());

		tracker.complete(first);
		assert!(tracker.is_in_flight());
		tracker.complete(second);
		assert!(!tracker.is_in_flight());
	}

	#[test]
	fn superseding_all_invalidates_the_latest_generation() {
		let mut tracker = RequestTracker::default();
		let id = tracker.issue();
		tracker.supersede_all();

		assert!(!tracker.is_latest(id));
		assert!(!tracker.is_in_flight());
		assert_eq!(tracker.latest(), None);
		assert!(tracker.issue() > id);
	}
}
