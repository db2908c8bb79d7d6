use serde::Deserialize;

use super::SearchError;
use crate::types::{SearchResult, TagSet};

/// Validated response body of the search endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPayload {
	/// The first predicted tag group, in backend order.
	pub tags: TagSet,
	/// Results in backend relevance order.
	pub results: Vec<SearchResult>,
}

impl SearchPayload {
	/// Decode and validate a raw JSON body.
	pub fn from_json(body: &[u8]) -> Result<Self, SearchError> {
		let wire: WireResponse = serde_json::from_slice(body)
			.map_err(|err| SearchError::malformed(err.to_string()))?;
		wire.validate()
	}
}

#[derive(Debug, Deserialize)]
struct WireResponse {
	tags: Vec<Vec<String>>,
	results: Vec<WireResult>,
}

#[derive(Debug, Deserialize)]
struct WireResult {
	title: String,
	body: String,
	url: String,
	votes: WireNumber,
	similarity_score: WireNumber,
}

/// The reference backend stringifies its numbers, other deployments do not.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireNumber {
	Integer(i64),
	Float(f64),
	Text(String),
}

impl WireNumber {
	fn as_integer(&self) -> Option<i64> {
		match self {
			Self::Integer(value) => Some(*value),
			Self::Float(value) => integral(*value),
			Self::Text(text) => {
				let text = text.trim();
				text.parse::<i64>()
					.ok()
					.or_else(|| text.parse::<f64>().ok().and_then(integral))
			}
		}
	}

	fn as_float(&self) -> Option<f64> {
		let value = match self {
			Self::Integer(value) => *value as f64,
			Self::Float(value) => *value,
			Self::Text(text) => text.trim().parse::<f64>().ok()?,
		};
		value.is_finite().then_some(value)
	}
}

/// `as` would saturate out-of-range floats, so the range is checked first.
fn integral(value: f64) -> Option<i64> {
	let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
	(value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

impl WireResponse {
	fn validate(self) -> Result<SearchPayload, SearchError> {
		let tags = self.tags.into_iter().next().unwrap_or_default();
		let results = self
			.results
			.into_iter()
			.enumerate()
			.map(|(index, result)| result.validate(index))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(SearchPayload { tags, results })
	}
}

impl WireResult {
	fn validate(self, index: usize) -> Result<SearchResult, SearchError> {
		let votes = self.votes.as_integer().ok_or_else(|| {
			SearchError::malformed(format!("result {index} has a non-integer vote count"))
		})?;
		let similarity_score = self.similarity_score.as_float().ok_or_else(|| {
			SearchError::malformed(format!("result {index} has a non-numeric similarity score"))
		})?;
		Ok(SearchResult {
			title: self.title,
			body_html: self.body,
			url: self.url,
			votes,
			similarity_score,
		})
	}
}
