//! Reduce untrusted result bodies to displayable text.
//!
//! The backend embeds HTML in each result body, mostly `<b>` tags that
//! emphasise words matching the query. Nothing from that markup is passed to
//! the terminal: every tag is dropped except bold emphasis, which becomes a
//! flag on the emitted span. Script and style contents disappear entirely,
//! character entities are decoded and whitespace runs collapse to one space.
//! Control characters never survive, whether raw or entity-encoded.

/// A run of sanitized text sharing one emphasis state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodySpan {
	pub text: String,
	pub emphasis: bool,
}

impl BodySpan {
	pub fn plain(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			emphasis: false,
		}
	}

	pub fn emphasised(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			emphasis: true,
		}
	}
}

const BREAKING_TAGS: &[&str] = &[
	"br", "p", "div", "li", "ul", "ol", "pre", "code", "blockquote", "tr", "td", "h1", "h2", "h3",
	"h4", "h5", "h6", "hr",
];

/// Parse `html` into sanitized spans.
#[must_use]
pub fn body_spans(html: &str) -> Vec<BodySpan> {
	let mut builder = SpanBuilder::default();
	let mut emphasis_depth = 0usize;
	let mut rest = html;

	while !rest.is_empty() {
		let Some(open) = find_tag_start(rest) else {
			builder.push_text(&decode_entities(rest), emphasis_depth > 0);
			break;
		};
		builder.push_text(&decode_entities(&rest[..open]), emphasis_depth > 0);

		let candidate = &rest[open..];
		if let Some(comment) = candidate.strip_prefix("<!--") {
			rest = comment.find("-->").map_or("", |end| &comment[end + 3..]);
			continue;
		}
		let Some(close) = find_tag_end(candidate) else {
			builder.push_text(&decode_entities(candidate), emphasis_depth > 0);
			break;
		};
		let tag = Tag::parse(&candidate[1..close]);
		rest = &candidate[close + 1..];

		match tag.name.as_str() {
			"b" | "strong" if tag.closing => {
				emphasis_depth = emphasis_depth.saturating_sub(1);
			}
			"b" | "strong" if !tag.self_closing => emphasis_depth += 1,
			"script" | "style" if !tag.closing => rest = skip_raw_text(rest, &tag.name),
			name if BREAKING_TAGS.contains(&name) => builder.break_word(),
			_ => {}
		}
	}

	builder.spans
}

/// Sanitized body flattened into a single string.
#[must_use]
pub fn plain_text(html: &str) -> String {
	body_spans(html)
		.into_iter()
		.map(|span| span.text)
		.collect()
}

/// Drop control characters from a plain backend field such as a title or url.
#[must_use]
pub fn strip_controls(text: &str) -> String {
	text.chars().filter(|ch| !ch.is_control()).collect()
}

/// Locate the next `<` that actually opens a tag, comment or declaration.
fn find_tag_start(text: &str) -> Option<usize> {
	text.char_indices()
		.filter(|&(_, ch)| ch == '<')
		.map(|(index, _)| index)
		.find(|&index| {
			text[index + 1..]
				.chars()
				.next()
				.is_some_and(|next| next.is_ascii_alphabetic() || next == '/' || next == '!')
		})
}

/// Position of the `>` closing the tag at the start of `text`, ignoring any
/// inside quoted attribute values.
fn find_tag_end(text: &str) -> Option<usize> {
	let mut quote = None;
	for (index, ch) in text.char_indices() {
		match (quote, ch) {
			(Some(open), _) if ch == open => quote = None,
			(Some(_), _) => {}
			(None, '"' | '\'') => quote = Some(ch),
			(None, '>') => return Some(index),
			_ => {}
		}
	}
	None
}

fn skip_raw_text<'a>(text: &'a str, name: &str) -> &'a str {
	let terminator = format!("</{name}");
	let lowered = text.to_ascii_lowercase();
	let Some(start) = lowered.find(&terminator) else {
		return "";
	};
	match text[start..].find('>') {
		Some(end) => &text[start + end + 1..],
		None => "",
	}
}

struct Tag {
	name: String,
	closing: bool,
	self_closing: bool,
}

impl Tag {
	fn parse(inner: &str) -> Self {
		let inner = inner.trim();
		let closing = inner.starts_with('/');
		let self_closing = inner.ends_with('/');
		let name = inner
			.trim_start_matches('/')
			.chars()
			.take_while(char::is_ascii_alphanumeric)
			.map(|ch| ch.to_ascii_lowercase())
			.collect();
		Self {
			name,
			closing,
			self_closing,
		}
	}
}

#[derive(Default)]
struct SpanBuilder {
	spans: Vec<BodySpan>,
	pending_space: bool,
}

impl SpanBuilder {
	fn push_text(&mut self, text: &str, emphasis: bool) {
		for ch in text.chars() {
			if ch.is_whitespace() {
				self.pending_space = true;
				continue;
			}
			if ch.is_control() {
				continue;
			}
			if self.pending_space {
				self.pending_space = false;
				if let Some(last) = self.spans.last() {
					// A separator is only emphasised when both neighbours are.
					let space_emphasis = emphasis && last.emphasis;
					self.push_char(' ', space_emphasis);
				}
			}
			self.push_char(ch, emphasis);
		}
	}

	fn break_word(&mut self) {
		self.pending_space = true;
	}

	fn push_char(&mut self, ch: char, emphasis: bool) {
		match self.spans.last_mut() {
			Some(last) if last.emphasis == emphasis => last.text.push(ch),
			_ => self.spans.push(BodySpan {
				text: ch.to_string(),
				emphasis,
			}),
		}
	}
}

fn decode_entities(text: &str) -> String {
	let mut decoded = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(amp) = rest.find('&') {
		decoded.push_str(&rest[..amp]);
		let candidate = &rest[amp..];
		let entity = candidate
			.find(';')
			.filter(|&end| end <= 10)
			.and_then(|end| decode_entity(&candidate[1..end]).map(|ch| (ch, end)));
		match entity {
			Some((ch, end)) => {
				decoded.push(ch);
				rest = &candidate[end + 1..];
			}
			None => {
				decoded.push('&');
				rest = &candidate[1..];
			}
		}
	}

	decoded.push_str(rest);
	decoded
}

fn decode_entity(name: &str) -> Option<char> {
	match name {
		"amp" => Some('&'),
		"lt" => Some('<'),
		"gt" => Some('>'),
		"quot" => Some('"'),
		"apos" | "#39" => Some('\''),
		"nbsp" => Some(' '),
		_ => {
			let number = name.strip_prefix('#')?;
			let code = match number.strip_prefix(|ch| ch == 'x' || ch == 'X') {
				Some(hex) => u32::from_str_radix(hex, 16).ok()?,
				None => number.parse().ok()?,
			};
			// Control characters are dropped later by `SpanBuilder::push_text`.
			char::from_u32(code)
		}
	}
}
