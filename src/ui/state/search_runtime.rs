use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;

use crate::session::{SearchTicket, Transport};
use crate::systems::search::{SearchCommand, SearchError};

/// [`Transport`] that hands requests to the background search worker.
pub struct SearchRuntime {
	tx: Sender<SearchCommand>,
	latest_query_id: Arc<AtomicU64>,
}

impl SearchRuntime {
	pub(crate) fn new(tx: Sender<SearchCommand>, latest_query_id: Arc<AtomicU64>) -> Self {
		Self {
			tx,
			latest_query_id,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SearchCommand::Shutdown);
	}
}

impl Transport for SearchRuntime {
	fn dispatch(&mut self, ticket: SearchTicket) -> Result<(), SearchError> {
		let SearchTicket { id, query } = ticket;
		// Publish before sending so the worker can skip anything older.
		self.latest_query_id.store(id, Ordering::Release);
		self.tx
			.send(SearchCommand::Query { id, query })
			.map_err(|_| SearchError::network("search worker has stopped"))
	}
}
