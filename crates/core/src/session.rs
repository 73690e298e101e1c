//! The picker state machine.

use tracing::{debug, trace};

use crate::command::{Command, CursorMove, Outcome, SelectionMove};
use crate::completion::{self, Completion};
use crate::error::EditError;
use crate::items::{DEFAULT_QUERY_CAPACITY, Item, ItemStore};
use crate::matcher::{MatchList, MatchOptions, Matcher};
use crate::pagination::{CellMeasure, Measure, Pager, Viewport, Window};
use crate::query::QueryBuffer;


/// Configuration a [`Session`] is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
	pub matching: MatchOptions,
	/// Complete to the common prefix of the page instead of the selection.
	pub tab_complete: bool,
	/// Rows in the vertical list; `0` lays matches out on one line.
	pub lines: usize,
	pub query_capacity: usize,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			matching: MatchOptions::default(),
			tab_complete: false,
			lines: 0,
			query_capacity: DEFAULT_QUERY_CAPACITY,
		}
	}
}

/// One interactive picking session over an [`ItemStore`].
///
/// Owns the query, the current match list, the page anchors and the
/// selection. Every [`Command`] runs to completion and leaves those in a
/// consistent state: the selection is on the current page and is absent only
/// when nothing matches.
pub struct Session {
	store: ItemStore,
	matcher: Matcher,
	tab_complete: bool,
	query: QueryBuffer,
	matches: MatchList,
	window: Window,
	selected: Option<usize>,
	lines: usize,
	viewport: Viewport,
	measure: Box<dyn Measure>,
}

impl Session {
	/// Start a session with an empty query.
	///
	/// The row count is clamped to the number of items; with no rows left
	/// the session lays matches out on one line.
	#[must_use]
	pub fn new(store: ItemStore, options: SessionOptions) -> Self {
		let lines = options.lines.min(store.len());
		let mut session = Self {
			store,
			matcher: Matcher::new(options.matching),
			tab_complete: options.tab_complete,
			query: QueryBuffer::new(options.query_capacity),
			matches: MatchList::default(),
			window: Window::default(),
			selected: None,
			lines,
			viewport: Viewport::for_lines(lines),
			measure: Box::new(CellMeasure::default()),
		};
		session.rematch();
		session
	}

	/// Use `measure` for item widths in flow mode.
	#[must_use]
	pub fn with_measure(mut self, measure: impl Measure + 'static) -> Self {
		self.measure = Box::new(measure);
		self.refresh_window();
		self
	}

	/// Replace the query text, truncated to capacity, and rematch.
	pub fn set_query(&mut self, text: &str) {
		self.query.set_text(text);
		self.rematch();
	}

	/// Change the flow-mode width budget. Row mode ignores it.
	pub fn resize_flow(&mut self, width: usize) {
		if let Viewport::Flow { width: current } = self.viewport
			&& current != width
		{
			self.viewport = Viewport::Flow { width };
			self.refresh_window();
		}
	}

	/// Fit the vertical list into `available` rows, never more than were
	/// configured. Flow mode ignores it.
	pub fn resize_rows(&mut self, available: usize) {
		if let Viewport::Rows(current) = self.viewport {
			let rows = self.lines.min(available).max(1);
			if rows != current {
				self.viewport = Viewport::Rows(rows);
				self.refresh_window();
			}
		}
	}

	#[must_use]
	pub fn query(&self) -> &QueryBuffer {
		&self.query
	}

	#[must_use]
	pub fn store(&self) -> &ItemStore {
		&self.store
	}

	#[must_use]
	pub fn matches(&self) -> &MatchList {
		&self.matches
	}

	#[must_use]
	pub fn window(&self) -> Window {
		self.window
	}

	#[must_use]
	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	/// Rows of the vertical list, or `0` in flow mode.
	#[must_use]
	pub fn rows(&self) -> usize {
		match self.viewport {
			Viewport::Rows(rows) => rows,
			Viewport::Flow { .. } => 0,
		}
	}

	/// Position of the highlighted match.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_item(&self) -> Option<&Item> {
		self.selected.and_then(|position| self.item_at(position))
	}

	/// Matches on the current page with their positions.
	pub fn page(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
		self.window
			.range(self.matches.len())
			.filter_map(|position| self.item_at(position).map(|item| (position, item)))
	}

	/// Whether matches exist before the current page.
	#[must_use]
	pub fn has_previous_page(&self) -> bool {
		self.window.current.is_some_and(|current| current > 0)
	}

	#[must_use]
	pub fn has_next_page(&self) -> bool {
		self.window.next.is_some()
	}

	/// Run `command` and report what the caller should do next.
	pub fn apply(&mut self, command: Command) -> Outcome {
		trace!(?command, "apply");
		match command {
			Command::Insert(text) => {
				// Rejected inserts are silent; the buffer is unchanged.
				let _ = self.insert(&text);
			}
			Command::Paste(text) => {
				let line = text.split('\n').next().unwrap_or_default();
				let _ = self.insert(line);
			}
			Command::DeleteBackward => self.edit(QueryBuffer::delete_backward),
			Command::DeleteForward => self.edit(QueryBuffer::delete_forward),
			Command::DeleteToStart => self.edit(QueryBuffer::delete_to_start),
			Command::DeleteToEnd => self.edit(QueryBuffer::delete_to_end),
			Command::DeleteWord => self.edit(QueryBuffer::delete_word),
			Command::MoveCursor(motion) => self.move_cursor(motion),
			Command::MoveSelection(SelectionMove::Up) => self.select_previous(),
			Command::MoveSelection(SelectionMove::Down) => self.select_next(),
			Command::PageUp => self.page_up(),
			Command::PageDown => self.page_down(),
			Command::Complete { repeat } => self.complete(repeat),
			Command::Accept { keep_open, literal } => return self.accept(keep_open, literal),
			Command::Cancel => return Outcome::Cancelled,
		}
		Outcome::Continue
	}

	/// Insert `text` at the cursor and rematch.
	pub fn insert(&mut self, text: &str) -> Result<(), EditError> {
		if let Err(err) = self.query.insert(text) {
			debug!(%err, "insert rejected");
			return Err(err);
		}
		self.rematch();
		Ok(())
	}

	/// Common-prefix completion over the current page.
	#[must_use]
	pub fn completion(&self, repeat: bool) -> Completion {
		let visible: Vec<&str> = self.page().map(|(_, item)| item.text()).collect();
		completion::common_prefix(
			&visible,
			self.query.text(),
			repeat,
			self.matcher.options().case,
		)
	}

	fn edit(&mut self, op: fn(&mut QueryBuffer) -> bool) {
		if op(&mut self.query) {
			self.rematch();
		}
	}

	fn move_cursor(&mut self, motion: CursorMove) {
		let rows = self.viewport.is_rows();
		match motion {
			CursorMove::Left => {
				let selection_has_left = self
					.selected
					.and_then(|position| self.matches.left(position))
					.is_some();
				if !self.query.at_start() && (!selection_has_left || rows) {
					self.query.move_left();
				} else if !rows {
					self.select_previous();
				}
			}
			CursorMove::Right => {
				if !self.query.at_end() {
					self.query.move_right();
				} else if !rows {
					self.select_next();
				}
			}
			CursorMove::Home => {
				if !self.query.move_home() {
					self.selected = self.matches.head();
					self.set_page(self.matches.head());
				}
			}
			CursorMove::End => {
				if !self.query.move_end() {
					self.select_last();
				}
			}
		}
	}

	fn select_previous(&mut self) {
		let Some(selected) = self.selected else {
			return;
		};
		let Some(left) = self.matches.left(selected) else {
			return;
		};
		self.selected = Some(left);
		if self.window.current == Some(selected) {
			self.set_page(self.window.previous);
		}
	}

	fn select_next(&mut self) {
		let Some(selected) = self.selected else {
			return;
		};
		let Some(right) = self.matches.right(selected) else {
			return;
		};
		self.selected = Some(right);
		if self.window.next == Some(right) {
			self.set_page(Some(right));
		}
	}

	fn select_last(&mut self) {
		if self.window.next.is_some() {
			self.window = self.pager().last_window();
		}
		self.selected = self.matches.tail();
	}

	fn page_up(&mut self) {
		let Some(previous) = self.window.previous else {
			return;
		};
		self.selected = Some(previous);
		self.set_page(Some(previous));
	}

	fn page_down(&mut self) {
		let Some(next) = self.window.next else {
			return;
		};
		self.selected = Some(next);
		self.set_page(Some(next));
	}

	fn complete(&mut self, repeat: bool) {
		let Some(selected) = self.selected_item().map(|item| item.text().to_owned()) else {
			return;
		};
		let completion = if self.tab_complete {
			self.completion(repeat)
		} else {
			Completion::Unavailable
		};
		debug!(?completion, repeat, "complete");
		match completion {
			Completion::Extended(prefix) => self.query.set_text(&prefix),
			Completion::Stalled => {}
			Completion::Unavailable => self.query.set_text(&selected),
		}
		self.query.move_end();
		self.rematch();
	}

	fn accept(&mut self, keep_open: bool, literal: bool) -> Outcome {
		let text = match self.selected_item() {
			Some(item) if !literal => item.text().to_owned(),
			_ => self.query.text().to_owned(),
		};
		if !keep_open {
			return Outcome::Accepted(text);
		}
		if let Some(index) = self
			.selected
			.and_then(|position| self.matches.item_index(position))
		{
			self.store.mark_output(index);
		}
		Outcome::Emitted(text)
	}

	fn rematch(&mut self) {
		self.matches = self.matcher.run(self.query.text(), &self.store);
		self.selected = self.matches.head();
		self.set_page(self.matches.head());
	}

	/// Recompute page anchors after the viewport changed, keeping the
	/// selection on the page.
	fn refresh_window(&mut self) {
		let current = self.window.current.or(self.matches.head());
		self.window = match self.selected {
			Some(selected) => self.pager().window_containing(current, selected),
			None => self.pager().window_at(current),
		};
	}

	fn set_page(&mut self, current: Option<usize>) {
		self.window = self.pager().window_at(current);
	}

	fn pager(&self) -> Pager<'_> {
		Pager::new(&self.matches, &self.store, self.viewport, self.measure.as_ref())
	}

	fn item_at(&self, position: usize) -> Option<&Item> {
		self.matches
			.item_index(position)
			.and_then(|index| self.store.get(index))
	}
}
