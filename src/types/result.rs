use serde::Serialize;

use crate::sanitize::{self, BodySpan};

/// One ranked hit returned by the search backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
	pub title: String,
	/// Untrusted HTML snippet exactly as the backend produced it.
	pub body_html: String,
	pub url: String,
	pub votes: i64,
	pub similarity_score: f64,
}

impl SearchResult {
	/// Sanitized body suitable for display.
	#[must_use]
	pub fn body_spans(&self) -> Vec<BodySpan> {
		sanitize::body_spans(&self.body_html)
	}

	/// Sanitized body flattened into plain text.
	#[must_use]
	pub fn body_text(&self) -> String {
		sanitize::plain_text(&self.body_html)
	}
}

/// Predicted topic tags in backend order.
pub type TagSet = Vec<String>;
