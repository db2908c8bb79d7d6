use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Request};

use super::{SearchError, SearchPayload};
use crate::types::SearchQuery;

/// Where the reference search service listens by default.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/getsearchresults";

/// A service that ranks results and predicts tags for a query.
///
/// Implementations block until the response is available; callers that must
/// stay responsive run them on the background [`worker`](super::worker).
pub trait SearchBackend: Send + Sync {
	fn search(&self, query: &SearchQuery) -> Result<SearchPayload, SearchError>;
}

/// [`SearchBackend`] speaking the `GET ?query=&num_results=` protocol.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	endpoint: String,
}

impl HttpBackend {
	pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("stacksearch/", env!("CARGO_PKG_VERSION")))
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self {
			client,
			endpoint: endpoint.into(),
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Build the GET request for `query` without sending it.
	pub fn request(&self, query: &SearchQuery) -> Result<Request, SearchError> {
		let count = query.result_count.to_string();
		self.client
			.get(&self.endpoint)
			.query(&[("query", query.text.as_str()), ("num_results", count.as_str())])
			.build()
			.map_err(|err| SearchError::network(err.to_string()))
	}
}

impl SearchBackend for HttpBackend {
	fn search(&self, query: &SearchQuery) -> Result<SearchPayload, SearchError> {
		let request = self.request(query)?;
		let response = self
			.client
			.execute(request)
			.map_err(|err| SearchError::network(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(SearchError::UnexpectedStatus {
				status: status.as_u16(),
			});
		}

		let body = response
			.bytes()
			.map_err(|err| SearchError::network(err.to_string()))?;
		SearchPayload::from_json(&body)
	}
}
