use serde::Serialize;

use super::SearchResult;

/// What the interactive session ended with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
	/// `true` when the user picked a result, `false` when they cancelled.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<SearchResult>,
}

impl SearchOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	pub fn accepted(query: impl Into<String>, selection: Option<SearchResult>) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection,
		}
	}
}
