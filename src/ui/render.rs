use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
	style::{Modifier, Style},
	text::{Line, Span, Text},
	widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use throbber_widgets_tui::Throbber;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget};
use unicode_width::UnicodeWidthChar;

use super::App;
use crate::sanitize::BodySpan;
use crate::session::ViewMode;
use crate::tui::theme::Theme;
use crate::types::SearchResult;

const INPUT_HEIGHT: u16 = 3;
const COUNT_WIDTH: u16 = 18;
const LOG_HEIGHT: u16 = 10;
const HIGHLIGHT_SYMBOL: &str = "▌ ";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let main_area = if self.show_logs {
			let [main, logs] = Layout::vertical([Constraint::Min(1), Constraint::Length(LOG_HEIGHT)])
				.areas(area);
			self.render_logs(frame, logs);
			main
		} else {
			area
		};

		match self.session.view_mode() {
			ViewMode::Landing => self.render_landing(frame, main_area),
			mode => self.render_active(frame, main_area, mode),
		}
	}

	fn render_landing(&mut self, frame: &mut Frame, area: Rect) {
		let [banner, inputs] = Layout::vertical([Constraint::Length(3), Constraint::Length(INPUT_HEIGHT)])
			.flex(Flex::Center)
			.areas(area);

		let title = Line::from(Span::styled(
			self.labels.title.clone(),
			self.theme.header_style().add_modifier(Modifier::BOLD),
		));
		let subtitle = Line::from(Span::styled(
			self.labels.subtitle.clone(),
			self.theme.empty_style(),
		));
		let banner_text = Paragraph::new(vec![title, subtitle]).alignment(Alignment::Center);
		frame.render_widget(banner_text, banner);

		self.render_inputs(frame, inputs);
	}

	fn render_active(&mut self, frame: &mut Frame, area: Rect, mode: ViewMode) {
		let [inputs, tags, results] = Layout::vertical([
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Length(1),
			Constraint::Min(1),
		])
		.areas(area);

		self.render_inputs(frame, inputs);
		self.render_tags(frame, tags);

		match mode {
			ViewMode::Populated => self.render_results(frame, results),
			ViewMode::Loading => {
				let spinner = Throbber::default()
					.style(self.theme.empty_style())
					.throbber_style(self.theme.empty_style())
					.to_symbol_span(&self.throbber_state);
				let line = Line::from(vec![
					spinner,
					Span::styled(self.labels.loading_message.clone(), self.theme.empty_style()),
				]);
				render_message(frame, results, Paragraph::new(line));
			}
			ViewMode::Empty | ViewMode::Landing => {
				let message = Paragraph::new(self.labels.empty_message.clone())
					.style(self.theme.empty_style());
				render_message(frame, results, message);
			}
		}
	}

	fn render_inputs(&mut self, frame: &mut Frame, area: Rect) {
		let [query_area, count_area] =
			Layout::horizontal([Constraint::Min(10), Constraint::Length(COUNT_WIDTH)]).areas(area);

		let mut query_title = Line::default();
		if self.session.is_pending() {
			let spinner = Throbber::default()
				.style(self.theme.prompt_style())
				.throbber_style(self.theme.prompt_style())
				.to_symbol_span(&self.throbber_state);
			query_title.spans.push(spinner);
		}
		query_title
			.spans
			.push(Span::raw(format!(" {} ", self.labels.query_title)));

		let query_block = Block::default()
			.borders(Borders::ALL)
			.title(query_title)
			.border_style(border_style(&self.theme, self.focus == super::Focus::Query));
		let count_block = Block::default()
			.borders(Borders::ALL)
			.title(format!(" {} ", self.labels.count_title))
			.border_style(border_style(
				&self.theme,
				self.focus == super::Focus::ResultCount,
			));

		let query_inner = query_block.inner(query_area);
		let count_inner = count_block.inner(count_area);
		frame.render_widget(query_block, query_area);
		frame.render_widget(count_block, count_area);
		frame.render_widget(self.query_input.widget(), query_inner);
		frame.render_widget(self.count_input.widget(), count_inner);
	}

	fn render_tags(&self, frame: &mut Frame, area: Rect) {
		let tags = &self.session.display().tags;
		let mut line = Line::from(Span::styled(
			format!("{}: ", self.labels.tags_label),
			self.theme.header_style(),
		));
		for (index, tag) in tags.iter().enumerate() {
			if index > 0 {
				line.spans.push(Span::raw(" "));
			}
			line.spans
				.push(Span::styled(format!("[{tag}]"), self.theme.tag_style()));
		}
		frame.render_widget(Paragraph::new(line), area);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let body_width = usize::from(area.width).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
		let items: Vec<ListItem<'static>> = self
			.session
			.display()
			.results
			.iter()
			.map(|result| result_card(result, &self.theme, body_width))
			.collect();

		let list = List::new(items)
			.highlight_style(self.theme.row_highlight_style())
			.highlight_symbol(HIGHLIGHT_SYMBOL);
		frame.render_stateful_widget(list, area, &mut self.list_state);
	}

	fn render_logs(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}
		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(self.theme.highlight_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.log_state);
		frame.render_widget(widget, area);
	}
}

fn border_style(theme: &Theme, focused: bool) -> Style {
	if focused {
		theme.prompt_style()
	} else {
		theme.empty_style()
	}
}

fn render_message(frame: &mut Frame, area: Rect, message: Paragraph<'_>) {
	if area.height == 0 {
		return;
	}
	let row = Rect {
		y: area.y + area.height / 3,
		height: 1,
		..area
	};
	frame.render_widget(Clear, row);
	frame.render_widget(message.alignment(Alignment::Center), row);
}

/// Four-line card: votes and title, the body, score and link, a spacer.
fn result_card(result: &SearchResult, theme: &Theme, body_width: usize) -> ListItem<'static> {
	let heading = Line::from(vec![
		Span::styled(format!("{:>5} ", result.votes), theme.empty_style()),
		Span::styled(
			result.title.clone(),
			theme.header_style().add_modifier(Modifier::BOLD),
		),
	]);

	let body = Line::from(
		truncate_spans(&result.body_spans(), body_width)
			.into_iter()
			.map(|span| {
				let style = if span.emphasis {
					theme.highlight_style()
				} else {
					Style::default()
				};
				Span::styled(span.text, style)
			})
			.collect::<Vec<_>>(),
	);

	let footer = Line::from(vec![
		Span::styled(
			format!("similarity {:.2}  ", result.similarity_score),
			theme.empty_style(),
		),
		Span::styled(result.url.clone(), theme.link_style()),
	]);

	ListItem::new(Text::from(vec![heading, body, footer, Line::default()]))
}

/// Cut `spans` to at most `max_width` terminal columns, ending with an
/// ellipsis when anything was dropped.
fn truncate_spans(spans: &[BodySpan], max_width: usize) -> Vec<BodySpan> {
	let mut out = Vec::new();
	let mut used = 0usize;
	let ellipsis_room = max_width.saturating_sub(1);

	let total: usize = spans
		.iter()
		.flat_map(|span| span.text.chars())
		.map(|ch| ch.width().unwrap_or(0))
		.sum();
	if total <= max_width {
		return spans.to_vec();
	}

	for span in spans {
		let mut text = String::new();
		for ch in span.text.chars() {
			let width = ch.width().unwrap_or(0);
			if used + width > ellipsis_room {
				if !text.is_empty() {
					out.push(BodySpan {
						text,
						emphasis: span.emphasis,
					});
				}
				if max_width > 0 {
					out.push(BodySpan::plain("…"));
				}
				return out;
			}
			used += width;
			text.push(ch);
		}
		out.push(BodySpan {
			text,
			emphasis: span.emphasis,
		});
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_bodies_are_left_alone() {
		let spans = vec![BodySpan::plain("sort "), BodySpan::emphasised("list")];
		assert_eq!(truncate_spans(&spans, 40), spans);
	}

	#[test]
	fn long_bodies_end_with_an_ellipsis() {
		let spans = vec![BodySpan::plain("abc "), BodySpan::emphasised("defgh")];
		assert_eq!(
			truncate_spans(&spans, 6),
			vec![
				BodySpan::plain("abc "),
				BodySpan::emphasised("d"),
				BodySpan::plain("…"),
			]
		);
	}

	#[test]
	fn wide_characters_count_double() {
		let spans = vec![BodySpan::plain("日本語テキスト")];
		assert_eq!(
			truncate_spans(&spans, 5),
			vec![BodySpan::plain("日本"), BodySpan::plain("…")]
		);
	}
}
