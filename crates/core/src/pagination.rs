//! Page boundaries over a [`MatchList`].
//!
//! A page never stores absolute indices. Given the position that starts the
//! current page, the [`Pager`] walks forward until the viewport budget is
//! spent to find where the next page starts, and walks backward the same way
//! to find where the previous page would start. Paging is then a jump to one
//! of those anchors followed by a recompute.

use std::ops::Range;

use unicode_width::UnicodeWidthStr;

use crate::items::ItemStore;
use crate::matcher::MatchList;

/// Cells of padding the overlay draws around every item in flow mode.
pub const ITEM_PADDING: usize = 2;

/// Space available for one page of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
	/// Vertical list; every match takes one of the rows.
	Rows(usize),
	/// Single-line list; matches take their rendered width until the budget
	/// is exceeded.
	Flow { width: usize },
}

impl Viewport {
	/// Row mode for a non-zero line count, flow mode otherwise.
	#[must_use]
	pub fn for_lines(lines: usize) -> Self {
		if lines > 0 {
			Self::Rows(lines)
		} else {
			Self::Flow { width: 0 }
		}
	}

	#[must_use]
	pub fn is_rows(self) -> bool {
		matches!(self, Self::Rows(_))
	}

	fn budget(self) -> usize {
		match self {
			Self::Rows(rows) => rows.max(1),
			Self::Flow { width } => width,
		}
	}
}

/// Rendered width of item text in flow mode.
pub trait Measure {
	fn width(&self, text: &str) -> usize;
}

/// Measures terminal cells plus fixed padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasure {
	pub padding: usize,
}

impl Default for CellMeasure {
	fn default() -> Self {
		Self {
			padding: ITEM_PADDING,
		}
	}
}

impl Measure for CellMeasure {
	fn width(&self, text: &str) -> usize {
		text.width().saturating_add(self.padding)
	}
}

/// Page anchors around the current page.
///
/// `current` is `None` only when the match list is empty. `previous` is
/// `None` on the first page and `next` is `None` on the last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
	pub previous: Option<usize>,
	pub current: Option<usize>,
	pub next: Option<usize>,
}

impl Window {
	/// Positions on the current page.
	#[must_use]
	pub fn range(&self, len: usize) -> Range<usize> {
		match self.current {
			Some(current) => current..self.next.unwrap_or(len).min(len),
			None => 0..0,
		}
	}

	#[must_use]
	pub fn contains(&self, position: usize) -> bool {
		self.current.is_some_and(|current| position >= current)
			&& self.next.is_none_or(|next| position < next)
	}
}

/// Computes [`Window`]s for one match list and viewport.
pub struct Pager<'a> {
	matches: &'a MatchList,
	store: &'a ItemStore,
	viewport: Viewport,
	measure: &'a dyn Measure,
}

impl<'a> Pager<'a> {
	#[must_use]
	pub fn new(
		matches: &'a MatchList,
		store: &'a ItemStore,
		viewport: Viewport,
		measure: &'a dyn Measure,
	) -> Self {
		Self {
			matches,
			store,
			viewport,
			measure,
		}
	}

	/// Anchors for the page that starts at `current`.
	#[must_use]
	pub fn window_at(&self, current: Option<usize>) -> Window {
		let Some(current) = current.filter(|position| *position < self.matches.len()) else {
			return Window::default();
		};
		let budget = self.viewport.budget();

		let mut spent = 0usize;
		let mut next = Some(current);
		while let Some(position) = next {
			spent = spent.saturating_add(self.cost(position));
			if spent > budget {
				break;
			}
			next = self.matches.right(position);
		}

		let mut spent = 0usize;
		let mut previous = current;
		while let Some(left) = self.matches.left(previous) {
			spent = spent.saturating_add(self.cost(left));
			if spent > budget {
				break;
			}
			previous = left;
		}

		Window {
			previous: (previous != current).then_some(previous),
			current: Some(current),
			next,
		}
	}

	/// Anchors for the page that ends with the last match.
	///
	/// Starts a page at the tail, steps back one page, then advances one
	/// match at a time until the last match is on the page.
	#[must_use]
	pub fn last_window(&self) -> Window {
		let Some(tail) = self.matches.tail() else {
			return Window::default();
		};
		let at_tail = self.window_at(Some(tail));
		let mut window = self.window_at(at_tail.previous.or(Some(tail)));
		while window.next.is_some() {
			let Some(right) = window.current.and_then(|current| self.matches.right(current)) else {
				break;
			};
			window = self.window_at(Some(right));
		}
		window
	}

	/// Anchors for a page that holds `target`, reached by paging from the
	/// page that starts at `current`.
	#[must_use]
	pub fn window_containing(&self, current: Option<usize>, target: usize) -> Window {
		if target >= self.matches.len() {
			return self.window_at(current);
		}
		let len = self.matches.len();
		let mut window = self.window_at(current.filter(|position| *position < len).or(Some(target)));
		while let Some(start) = window.current
			&& start > target
		{
			window = self.window_at(window.previous.or(Some(target)));
		}
		while let Some(next) = window.next
			&& !window.contains(target)
		{
			window = self.window_at(Some(next));
		}
		window
	}

	fn cost(&self, position: usize) -> usize {
		match self.viewport {
			Viewport::Rows(_) => 1,
			Viewport::Flow { width } => {
				let text = self
					.matches
					.item_index(position)
					.and_then(|index| self.store.get(index))
					.map_or("", |item| item.text());
				self.measure.width(text).min(width)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::matcher::Matcher;

	fn numbered(count: usize) -> ItemStore {
		ItemStore::from_lines((0..count).map(|n| format!("item{n}")))
	}

	fn all(store: &ItemStore) -> MatchList {
		Matcher::default().run("", store)
	}

	#[test]
	fn rows_split_into_fixed_pages() {
		let store = numbered(10);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(4), &measure);

		let first = pager.window_at(Some(0));
		assert_eq!(first, Window { previous: None, current: Some(0), next: Some(4) });
		assert_eq!(first.range(matches.len()), 0..4);

		let second = pager.window_at(first.next);
		assert_eq!(second, Window { previous: Some(0), current: Some(4), next: Some(8) });

		let third = pager.window_at(second.next);
		assert_eq!(third, Window { previous: Some(4), current: Some(8), next: None });
		assert_eq!(third.range(matches.len()), 8..10);
	}

	#[test]
	fn previous_anchor_is_a_full_page_back() {
		let store = numbered(10);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(4), &measure);

		assert_eq!(pager.window_at(Some(6)).previous, Some(2));
		assert_eq!(pager.window_at(Some(2)).previous, Some(0));
	}

	#[test]
	fn flow_pages_spend_the_width_budget() {
		// Each item is 5 cells wide plus 2 of padding.
		let store = numbered(6);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Flow { width: 15 }, &measure);

		let first = pager.window_at(Some(0));
		assert_eq!(first.next, Some(2));
		let second = pager.window_at(first.next);
		assert_eq!(second, Window { previous: Some(0), current: Some(2), next: Some(4) });
	}

	#[test]
	fn oversized_items_still_get_a_page_of_their_own() {
		let store = ItemStore::from_lines(["a much longer item than fits", "b", "c"]);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Flow { width: 10 }, &measure);

		let first = pager.window_at(Some(0));
		assert_eq!(first.next, Some(1));
		assert_eq!(pager.window_at(Some(1)).previous, Some(0));
	}

	#[test]
	fn empty_list_has_no_anchors() {
		let store = ItemStore::new();
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(3), &measure);
		assert_eq!(pager.window_at(Some(0)), Window::default());
		assert_eq!(pager.last_window(), Window::default());
		assert_eq!(Window::default().range(0), 0..0);
	}

	#[test]
	fn last_window_ends_on_the_tail() {
		let store = numbered(10);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(4), &measure);

		let last = pager.last_window();
		assert_eq!(last.current, Some(6));
		assert_eq!(last.next, None);
		assert!(last.contains(9));
	}

	#[test]
	fn last_window_on_a_single_page_starts_at_the_head() {
		let store = numbered(3);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(5), &measure);
		assert_eq!(pager.last_window(), Window { previous: None, current: Some(0), next: None });
	}

	#[test]
	fn paging_down_then_up_returns_to_the_start() {
		let store = numbered(23);
		let matches = all(&store);
		let measure = CellMeasure::default();
		for viewport in [Viewport::Rows(5), Viewport::Flow { width: 30 }] {
			let pager = Pager::new(&matches, &store, viewport, &measure);
			let mut start = Some(0);
			while let Some(current) = start {
				let here = pager.window_at(Some(current));
				let Some(next) = here.next else { break };
				let there = pager.window_at(Some(next));
				assert_eq!(there.previous, Some(current), "{viewport:?} from {current}");
				start = Some(next);
			}
		}
	}

	#[test]
	fn window_containing_pages_towards_the_target() {
		let store = numbered(10);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(3), &measure);

		let forward = pager.window_containing(Some(0), 7);
		assert_eq!(forward.current, Some(6));
		assert!(forward.contains(7));

		let backward = pager.window_containing(Some(9), 1);
		assert!(backward.contains(1));
		assert_eq!(pager.window_containing(Some(3), 4).current, Some(3));
	}

	#[test]
	fn zero_rows_still_show_one_match() {
		let store = numbered(3);
		let matches = all(&store);
		let measure = CellMeasure::default();
		let pager = Pager::new(&matches, &store, Viewport::Rows(0), &measure);
		assert_eq!(pager.window_at(Some(0)).next, Some(1));
	}

	#[test]
	fn for_lines_picks_the_layout() {
		assert_eq!(Viewport::for_lines(3), Viewport::Rows(3));
		assert_eq!(Viewport::for_lines(0), Viewport::Flow { width: 0 });
		assert!(Viewport::Rows(1).is_rows());
	}
}
