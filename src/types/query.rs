use std::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

use crate::systems::search::SearchError;

/// Number of results requested from the backend.
///
/// Only positive integers are representable, so a value of this type can be
/// forwarded to the backend as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResultCount(NonZeroU32);

impl ResultCount {
	pub const DEFAULT: u32 = 5;

	/// Parse raw user input into a count.
	///
	/// Surrounding whitespace is ignored. Empty, non-numeric, zero, negative
	/// and out-of-range text is rejected.
	pub fn parse(raw: &str) -> Result<Self, SearchError> {
		raw.trim()
			.parse::<NonZeroU32>()
			.map(Self)
			.map_err(|_| SearchError::invalid_count(raw))
	}

	#[must_use]
	pub fn new(value: u32) -> Option<Self> {
		NonZeroU32::new(value).map(Self)
	}

	#[must_use]
	pub fn get(self) -> u32 {
		self.0.get()
	}
}

impl Default for ResultCount {
	fn default() -> Self {
		Self(NonZeroU32::new(Self::DEFAULT).unwrap_or(NonZeroU32::MIN))
	}
}

impl fmt::Display for ResultCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// The effective `(text, count)` pair a search request is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
	pub text: String,
	pub result_count: ResultCount,
}

impl SearchQuery {
	pub fn new(text: impl Into<String>, result_count: ResultCount) -> Self {
		Self {
			text: text.into(),
			result_count,
		}
	}

	/// An empty query means "no active search" and is never sent.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}
}
