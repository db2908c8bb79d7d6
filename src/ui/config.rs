/// Text used by the UI for titles, labels and placeholder messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	pub title: String,
	pub subtitle: String,
	pub query_title: String,
	pub query_placeholder: String,
	pub count_title: String,
	pub tags_label: String,
	pub loading_message: String,
	pub empty_message: String,
}

impl UiLabels {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "StackSearch".to_string(),
			subtitle: "Semantic search over Stack Overflow questions".to_string(),
			query_title: "Search Query".to_string(),
			query_placeholder: "Type to search".to_string(),
			count_title: "No. of results".to_string(),
			tags_label: "Predicted Tags".to_string(),
			loading_message: "Searching".to_string(),
			empty_message: "No results".to_string(),
		}
	}
}
