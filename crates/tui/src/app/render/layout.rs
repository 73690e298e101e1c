use linepick_core::{CellMeasure, Measure};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::app::Placement;

pub(crate) const PREVIOUS_MARKER: &str = "<";
pub(crate) const NEXT_MARKER: &str = ">";

/// Cells taken by a page marker, padding included.
pub(crate) fn marker_width() -> u16 {
	cells(CellMeasure::default().width(PREVIOUS_MARKER))
}

pub(crate) fn cells(width: usize) -> u16 {
	u16::try_from(width).unwrap_or(u16::MAX)
}

/// Where each part of the overlay goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
	/// The whole overlay: the input line plus any list rows.
	pub(crate) overlay: Rect,
	/// Cells of the prompt label, `0` without a prompt.
	pub(crate) prompt_width: u16,
	/// Cells reserved for the input field when matches flow after it.
	pub(crate) input_width: u16,
}

impl Geometry {
	pub(crate) fn compute(
		screen: Rect,
		prompt: Option<&str>,
		rows: usize,
		widest_item: usize,
		placement: Placement,
	) -> Self {
		let height = cells(rows.saturating_add(1)).min(screen.height);
		let y = match placement {
			Placement::Top => screen.y,
			Placement::Bottom => screen.y + screen.height.saturating_sub(height),
		};
		let overlay = Rect::new(screen.x, y, screen.width, height);

		let prompt_width = prompt
			.map_or(0, |prompt| cells(prompt.width().saturating_add(2)))
			.min(screen.width);
		let input_width = cells(widest_item).min(screen.width / 3);

		Self {
			overlay,
			prompt_width,
			input_width,
		}
	}

	/// Cells left for matches in flow mode.
	pub(crate) fn flow_budget(&self) -> usize {
		usize::from(
			self.overlay
				.width
				.saturating_sub(self.prompt_width)
				.saturating_sub(self.input_width)
				.saturating_sub(marker_width().saturating_mul(2)),
		)
	}

	pub(crate) fn prompt_rect(&self) -> Rect {
		Rect::new(self.overlay.x, self.overlay.y, self.prompt_width, self.overlay.height.min(1))
	}

	/// The input field; it takes the rest of the line unless matches flow
	/// after it.
	pub(crate) fn input_rect(&self, full_line: bool) -> Rect {
		let rest = self.overlay.width.saturating_sub(self.prompt_width);
		let width = if full_line {
			rest
		} else {
			self.input_width.min(rest)
		};
		Rect::new(
			self.overlay.x + self.prompt_width,
			self.overlay.y,
			width,
			self.overlay.height.min(1),
		)
	}

	/// The row for the `index`th match of a vertical list.
	pub(crate) fn list_row(&self, index: usize) -> Option<Rect> {
		let offset = cells(index.saturating_add(1));
		(offset < self.overlay.height).then(|| {
			Rect::new(
				self.overlay.x + self.prompt_width,
				self.overlay.y + offset,
				self.overlay.width.saturating_sub(self.prompt_width),
				1,
			)
		})
	}

	/// First column after the input field on the input line.
	pub(crate) fn flow_start(&self) -> u16 {
		self.overlay.x + self.prompt_width + self.input_width
	}

	/// Last column (exclusive) available to flowing matches.
	pub(crate) fn flow_end(&self) -> u16 {
		self.overlay.right().saturating_sub(marker_width())
	}
}
