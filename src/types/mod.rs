//! Types shared across the search session, the backend and the user interface.

mod outcome;
mod query;
mod result;

pub use outcome::SearchOutcome;
pub use query::{ResultCount, SearchQuery};
pub use result::{SearchResult, TagSet};
