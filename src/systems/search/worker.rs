use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::debug;

use super::SearchBackend;
use super::commands::{SearchCommand, SearchResponse};

/// Launches the background search worker thread and returns communication channels.
///
/// The returned counter must be updated with every issued id before the
/// matching [`SearchCommand::Query`] is sent; the worker uses it to skip
/// queued requests that were superseded before they reached the wire.
pub(crate) fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> (
	Sender<SearchCommand>,
	Receiver<SearchResponse>,
	Arc<AtomicU64>,
) {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();
	let latest_query_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_query_id);

	thread::spawn(move || worker_loop(backend.as_ref(), command_rx, response_tx, thread_latest));

	(command_tx, response_rx, latest_query_id)
}

fn worker_loop(
	backend: &dyn SearchBackend,
	command_rx: Receiver<SearchCommand>,
	response_tx: Sender<SearchResponse>,
	latest_query_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, &response_tx, &latest_query_id, command) {
			break;
		}
	}
}

fn handle_command(
	backend: &dyn SearchBackend,
	response_tx: &Sender<SearchResponse>,
	latest_query_id: &AtomicU64,
	command: SearchCommand,
) -> bool {
	match command {
		SearchCommand::Query { id, query } => {
			if is_superseded(id, latest_query_id) {
				debug!("skipping request #{id} for '{}': superseded before dispatch", query.text);
				return true;
			}
			let outcome = backend.search(&query);
			response_tx
				.send(SearchResponse { id, query, outcome })
				.is_ok()
		}
		SearchCommand::Shutdown => false,
	}
}

fn is_superseded(id: u64, latest_query_id: &AtomicU64) -> bool {
	latest_query_id.load(Ordering::Acquire) != id
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;
	use std::sync::mpsc::RecvTimeoutError;
	use std::time::Duration;

	use crate::systems::search::{SearchError, SearchPayload};
	use crate::types::{ResultCount, SearchQuery};

	#[derive(Default)]
	struct RecordingBackend {
		seen: Mutex<Vec<String>>,
	}

	impl SearchBackend for RecordingBackend {
		fn search(&self, query: &SearchQuery) -> Result<SearchPayload, SearchError> {
			self.seen.lock().unwrap().push(query.text.clone());
			if query.text == "fail" {
				return Err(SearchError::UnexpectedStatus { status: 500 });
			}
			Ok(SearchPayload {
				tags: vec![query.text.clone()],
				results: Vec::new(),
			})
		}
	}

	fn query(text: &str) -> SearchQuery {
		SearchQuery::new(text, ResultCount::default())
	}

	fn send(tx: &Sender<SearchCommand>, latest: &AtomicU64, id: u64, text: &str) {
		latest.store(id, Ordering::Release);
		tx.send(SearchCommand::Query {
			id,
			query: query(text),
		})
		.expect("send query");
	}

	#[test]
	fn shutdown_command_stops_worker() {
		let (tx, rx, latest) = spawn(Arc::new(RecordingBackend::default()));
		assert_eq!(latest.load(Ordering::Relaxed), 0);
		tx.send(SearchCommand::Shutdown).unwrap();
		assert_eq!(
			rx.recv_timeout(Duration::from_secs(1)).unwrap_err(),
			RecvTimeoutError::Disconnected
		);
	}

	#[test]
	fn responses_are_tagged_with_their_generation() {
		let (tx, rx, latest) = spawn(Arc::new(RecordingBackend::default()));
		send(&tx, &latest, 1, "rust");

		let response = rx
			.recv_timeout(Duration::from_secs(1))
			.expect("receive search response");
		assert_eq!(response.id, 1);
		assert_eq!(response.query.text, "rust");
		assert_eq!(response.outcome.unwrap().tags, vec!["rust"]);

		send(&tx, &latest, 2, "fail");
		let response = rx
			.recv_timeout(Duration::from_secs(1))
			.expect("receive failed response");
		assert_eq!(
			response.outcome,
			Err(SearchError::UnexpectedStatus { status: 500 })
		);

		tx.send(SearchCommand::Shutdown).unwrap();
	}

	#[test]
	fn superseded_queries_never_reach_the_backend() {
		let backend = Arc::new(RecordingBackend::default());
		let latest = AtomicU64::new(3);
		let (response_tx, response_rx) = mpsc::channel();

		for (id, text) in [(1, "a"), (2, "ab"), (3, "abc")] {
			let command = SearchCommand::Query {
				id,
				query: query(text),
			};
			assert!(handle_command(
				backend.as_ref(),
				&response_tx,
				&latest,
				command
			));
		}

		assert_eq!(*backend.seen.lock().unwrap(), vec!["abc".to_string()]);
		let response = response_rx.try_recv().expect("latest response");
		assert_eq!(response.id, 3);
		assert!(response_rx.try_recv().is_err());
	}
}
