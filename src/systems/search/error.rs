use thiserror::Error;

/// Failures the search session absorbs without surfacing an error state.
///
/// Every variant is handled locally: the display keeps whatever it showed
/// before and the failure is reported through the log.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
	/// The request never completed (connection refused, timeout, reset).
	#[error("search request failed: {reason}")]
	NetworkFailure { reason: String },

	/// The backend answered with a non-success status code.
	#[error("search backend answered with status {status}")]
	UnexpectedStatus { status: u16 },

	/// The payload was missing expected fields or carried unusable values.
	#[error("malformed search response: {reason}")]
	MalformedResponse { reason: String },

	/// The result count typed by the user is not a positive integer.
	#[error("result count '{raw}' is not a positive integer")]
	InvalidResultCount { raw: String },
}

impl SearchError {
	pub fn network(reason: impl Into<String>) -> Self {
		Self::NetworkFailure {
			reason: reason.into(),
		}
	}

	pub fn malformed(reason: impl Into<String>) -> Self {
		Self::MalformedResponse {
			reason: reason.into(),
		}
	}

	pub fn invalid_count(raw: impl Into<String>) -> Self {
		Self::InvalidResultCount { raw: raw.into() }
	}
}
