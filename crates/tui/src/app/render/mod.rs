pub(crate) mod layout;

use layout::{Geometry, NEXT_MARKER, PREVIOUS_MARKER, cells, marker_width};
use linepick_core::{CellMeasure, Measure};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::App;

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let screen = frame.area();
		self.session.resize_rows(usize::from(screen.height.saturating_sub(1)));
		let rows = self.session.rows();
		let geometry = Geometry::compute(
			screen,
			self.prompt.as_deref(),
			rows,
			self.widest_item,
			self.placement,
		);
		if geometry.overlay.is_empty() {
			return;
		}
		if rows == 0 {
			self.session.resize_flow(geometry.flow_budget());
		}

		let theme = self.style.theme;
		frame.render_widget(Clear, geometry.overlay);
		frame.render_widget(Block::new().style(theme.normal), geometry.overlay);

		if let Some(prompt) = self.prompt.as_deref() {
			let label = Paragraph::new(format!(" {prompt} ")).style(theme.prompt);
			frame.render_widget(label, geometry.prompt_rect());
		}

		let full_line = rows > 0 || self.session.matches().is_empty();
		self.render_input(frame, geometry.input_rect(full_line), theme.normal);

		if rows > 0 {
			self.render_rows(frame, &geometry);
		} else {
			self.render_flow(frame, &geometry);
		}
	}

	fn render_input(&self, frame: &mut Frame, area: Rect, style: Style) {
		let query = self.session.query();
		frame.render_widget(Paragraph::new(format!(" {}", query.text())).style(style), area);

		let offset = cells(query.before_cursor().width().saturating_add(1));
		let x = area
			.x
			.saturating_add(offset)
			.min(area.right().saturating_sub(1));
		frame.set_cursor_position(Position::new(x, area.y));
	}

	fn render_rows(&self, frame: &mut Frame, geometry: &Geometry) {
		let theme = self.style.theme;
		let selected = self.session.selected();

		for (index, (position, item)) in self.session.page().enumerate() {
			let Some(area) = geometry.list_row(index) else {
				break;
			};
			let style = theme.item_style(selected == Some(position), item.is_output());
			frame.render_widget(Paragraph::new(format!(" {}", item.text())).style(style), area);
		}
	}

	fn render_flow(&self, frame: &mut Frame, geometry: &Geometry) {
		let theme = self.style.theme;
		let selected = self.session.selected();
		let measure = CellMeasure::default();
		let marker = marker_width();
		let y = geometry.overlay.y;

		let mut x = geometry.flow_start();
		if self.session.has_previous_page() {
			draw_label(frame, Rect::new(x, y, marker, 1), PREVIOUS_MARKER, theme.normal);
		}
		x = x.saturating_add(marker);

		let end = geometry.flow_end();
		for (position, item) in self.session.page() {
			if x >= end {
				break;
			}
			let width = cells(measure.width(item.text())).min(end - x);
			let style = theme.item_style(selected == Some(position), item.is_output());
			draw_label(frame, Rect::new(x, y, width, 1), item.text(), style);
			x = x.saturating_add(width);
		}

		if self.session.has_next_page() {
			let x = geometry.overlay.right().saturating_sub(marker);
			draw_label(frame, Rect::new(x, y, marker, 1), NEXT_MARKER, theme.normal);
		}
	}
}

/// Text padded by one cell on each side.
fn draw_label(frame: &mut Frame, area: Rect, text: &str, style: Style) {
	frame.render_widget(Paragraph::new(format!(" {text} ")).style(style), area);
}
