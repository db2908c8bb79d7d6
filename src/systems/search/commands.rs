use super::{SearchError, SearchPayload};
use crate::types::SearchQuery;

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
	/// Fetch results for the provided query.
	Query {
		/// Generation that lets the session correlate the response with its request.
		id: u64,
		query: SearchQuery,
	},
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one fetch, tagged with the generation it was issued under.
#[derive(Debug, Clone)]
pub struct SearchResponse {
	pub id: u64,
	pub query: SearchQuery,
	pub outcome: Result<SearchPayload, SearchError>,
}
