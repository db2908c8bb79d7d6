use std::fmt::Write;

use anyhow::Result;
use serde_json::{Value, json};
use stacksearch::sanitize::strip_controls;
use stacksearch::{SearchOutcome, SearchPayload, SearchQuery, SearchResult};

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", strip_controls(&outcome.query));
	}
	match &outcome.selection {
		Some(result) => strip_controls(&result.url),
		None => "No selection".to_string(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": outcome.selection.as_ref().map(result_json),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Print tags and results of a one-shot search as text.
pub(crate) fn print_payload_plain(payload: &SearchPayload) {
	print!("{}", format_payload_plain(payload));
}

fn format_payload_plain(payload: &SearchPayload) -> String {
	let mut out = String::new();
	let tags = if payload.tags.is_empty() {
		"(none)".to_string()
	} else {
		strip_controls(&payload.tags.join(", "))
	};
	let _ = writeln!(out, "Predicted tags: {tags}");

	if payload.results.is_empty() {
		let _ = writeln!(out, "No results");
		return out;
	}
	for result in &payload.results {
		let _ = writeln!(
			out,
			"[{}] {} (similarity {:.2})",
			result.votes,
			strip_controls(&result.title),
			result.similarity_score
		);
		let _ = writeln!(out, "    {}", result.body_text());
		let _ = writeln!(out, "    {}", strip_controls(&result.url));
	}
	out
}

/// Format a one-shot search as a JSON string.
pub(crate) fn format_payload_json(query: &SearchQuery, payload: &SearchPayload) -> Result<String> {
	let value = json!({
		"query": query.text,
		"num_results": query.result_count.get(),
		"tags": payload.tags,
		"results": payload.results.iter().map(result_json).collect::<Vec<_>>(),
	});
	Ok(serde_json::to_string_pretty(&value)?)
}

/// Print the JSON representation of a one-shot search.
pub(crate) fn print_payload_json(query: &SearchQuery, payload: &SearchPayload) -> Result<()> {
	println!("{}", format_payload_json(query, payload)?);
	Ok(())
}

/// Bodies are emitted sanitized; raw backend HTML never leaves the process.
fn result_json(result: &SearchResult) -> Value {
	json!({
		"title": result.title,
		"body": result.body_text(),
		"url": result.url,
		"votes": result.votes,
		"similarity_score": result.similarity_score,
	})
}
