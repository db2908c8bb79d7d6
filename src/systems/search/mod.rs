//! Everything that talks to the remote search service.
//!
//! [`SearchBackend`] is the seam between the session and the network. The
//! interactive UI drives it from a background [`worker`] thread so the event
//! loop never blocks on a round trip.

mod backend;
mod commands;
mod error;
mod payload;
mod worker;

pub use backend::{DEFAULT_ENDPOINT, HttpBackend, SearchBackend};
pub use commands::SearchResponse;
pub(crate) use commands::SearchCommand;
pub use error::SearchError;
pub use payload::SearchPayload;
pub(crate) use worker::spawn;
