use std::time::{Duration, Instant};

/// Delay before an emptied query returns the widget to its landing state.
pub const DEFAULT_CLEAR_DELAY: Duration = Duration::from_millis(700);

/// A resettable one-shot deadline for the debounced clear.
///
/// Scheduling replaces any earlier deadline, so only the most recent request
/// to clear can ever fire.
#[derive(Debug, Clone)]
pub struct ClearTimer {
	delay: Duration,
	deadline: Option<Instant>,
}

impl ClearTimer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			deadline: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Arm the timer relative to `now`, replacing any pending deadline.
	pub fn schedule(&mut self, now: Instant) -> Instant {
		let deadline = now + self.delay;
		self.deadline = Some(deadline);
		deadline
	}

	/// Disarm the timer. Returns whether a clear was pending.
	pub fn cancel(&mut self) -> bool {
		self.deadline.take().is_some()
	}

	/// Consume the deadline if it has elapsed at `now`.
	pub fn fire_if_due(&mut self, now: Instant) -> bool {
		match self.deadline {
			Some(deadline) if now >= deadline => {
				self.deadline = None;
				true
			}
			_ => false,
		}
	}
}

impl Default for ClearTimer {
	fn default() -> Self {
		Self::new(DEFAULT_CLEAR_DELAY)
	}
}
