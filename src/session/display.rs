use serde::Serialize;

use crate::types::{SearchResult, TagSet};

/// What the render surface draws.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayState {
	/// `true` from the first submitted query until the debounced clear runs.
	pub is_active: bool,
	pub results: Vec<SearchResult>,
	pub tags: TagSet,
}

impl DisplayState {
	/// Return to the landing state.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

/// Which visual mode the render surface should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
	/// Nothing submitted yet, or the debounced clear has completed.
	Landing,
	/// Active with a request in flight and nothing to show yet.
	Loading,
	/// Active and settled, but the backend returned no results.
	Empty,
	/// Active with results on screen.
	Populated,
}

impl ViewMode {
	#[must_use]
	pub fn derive(display: &DisplayState, pending: bool) -> Self {
		if !display.is_active {
			Self::Landing
		} else if !display.results.is_empty() {
			Self::Populated
		} else if pending {
			Self::Loading
		} else {
			Self::Empty
		}
	}
}
