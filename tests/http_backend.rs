//! Drives [`HttpBackend`] against a throwaway HTTP server on localhost.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use stacksearch::{HttpBackend, ResultCount, SearchBackend, SearchError, SearchQuery};

/// Serve exactly one response and report the request line that was received.
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<String>) {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
	let address = listener.local_addr().expect("local addr");
	let response = format!(
		"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
		body.len()
	);
	let (tx, rx) = mpsc::channel();

	thread::spawn(move || {
		let (mut stream, _) = listener.accept().expect("accept");
		let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
		let mut request_line = String::new();
		reader.read_line(&mut request_line).expect("request line");
		loop {
			let mut header = String::new();
			let read = reader.read_line(&mut header).expect("header");
			if read == 0 || header == "\r\n" {
				break;
			}
		}
		stream.write_all(response.as_bytes()).expect("write response");
		stream.flush().expect("flush");
		let _ = tx.send(request_line.trim_end().to_string());
	});

	(format!("http://{address}/getsearchresults"), rx)
}

fn backend(endpoint: &str) -> HttpBackend {
	HttpBackend::new(endpoint, Duration::from_secs(5)).expect("client")
}

fn query(text: &str, count: u32) -> SearchQuery {
	SearchQuery::new(text, ResultCount::new(count).expect("non-zero count"))
}

#[test]
fn decodes_reference_backend_payload() {
	let body = r#"{
		"tags": [["python", "sorting", "list"]],
		"results": [
			{
				"title": "How do I sort a list of dictionaries by a value?",
				"body": " use <b style='color: #464646'>sorted</b> with a key",
				"url": "https://stackoverflow.com/questions/72899",
				"votes": "2035",
				"similarity_score": "0.873"
			}
		]
	}"#;
	let (endpoint, requests) = serve_once("200 OK", body);

	let payload = backend(&endpoint)
		.search(&query("sort list", 3))
		.expect("search succeeds");

	assert_eq!(payload.tags, vec!["python", "sorting", "list"]);
	assert_eq!(payload.results.len(), 1);
	let result = &payload.results[0];
	assert_eq!(result.votes, 2035);
	assert!((result.similarity_score - 0.873).abs() < f64::EPSILON);
	assert_eq!(result.body_text(), "use sorted with a key");

	let request_line = requests
		.recv_timeout(Duration::from_secs(5))
		.expect("request recorded");
	assert_eq!(
		request_line,
		"GET /getsearchresults?query=sort+list&num_results=3 HTTP/1.1"
	);
}

#[test]
fn non_success_status_is_reported() {
	let (endpoint, _requests) = serve_once("500 Internal Server Error", "{}");
	let err = backend(&endpoint)
		.search(&query("heap", 5))
		.unwrap_err();
	assert_eq!(err, SearchError::UnexpectedStatus { status: 500 });
}

#[test]
fn malformed_body_is_reported() {
	let (endpoint, _requests) = serve_once("200 OK", r#"{"tags": []}"#);
	let err = backend(&endpoint)
		.search(&query("heap", 5))
		.unwrap_err();
	assert!(matches!(err, SearchError::MalformedResponse { .. }), "{err:?}");
}

#[test]
fn unreachable_endpoint_is_a_network_failure() {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
	let address = listener.local_addr().expect("local addr");
	drop(listener);

	let err = backend(&format!("http://{address}/getsearchresults"))
		.search(&query("heap", 5))
		.unwrap_err();
	assert!(matches!(err, SearchError::NetworkFailure { .. }), "{err:?}");
}
