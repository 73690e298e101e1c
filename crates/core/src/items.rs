//! The ordered set of candidate lines a session picks from.

use std::io::{self, BufRead};

use tracing::debug;

/// Default size of the query buffer, in bytes. Input lines are truncated to
/// one byte less so that any item can be copied into the query.
pub const DEFAULT_QUERY_CAPACITY: usize = 8192;

/// One candidate line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
	text: String,
	hidden: bool,
	output: bool,
}

impl Item {
	#[must_use]
	pub fn new(text: impl Into<String>, hidden: bool) -> Self {
		Self {
			text: text.into(),
			hidden,
			output: false,
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Hidden items only show up once the query is non-empty.
	#[must_use]
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// Whether the item was already emitted during a multi-accept session.
	#[must_use]
	pub fn is_output(&self) -> bool {
		self.output
	}
}

/// Load-ordered arena of [`Item`]s.
///
/// The order is fixed once loading finishes; match lists refer to items by
/// their index in this store. The only mutation after load is flagging items
/// as emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
	items: Vec<Item>,
}

impl ItemStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a store from in-memory lines.
	///
	/// An empty line is a separator: it toggles whether the lines after it
	/// are hidden, the same as a blank line in streamed input.
	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut store = Self::new();
		let mut hidden = false;
		for line in lines {
			let line = line.into();
			if line.is_empty() {
				hidden = !hidden;
				continue;
			}
			store.push(line, hidden);
		}
		store
	}

	/// Read newline-separated items from `reader`.
	///
	/// Lines are stored verbatim apart from the trailing `\n`. A line that
	/// holds nothing but the newline toggles hidden mode for the lines that
	/// follow. Lines longer than `capacity - 1` bytes are cut at the closest
	/// preceding code-point boundary, and invalid UTF-8 is replaced.
	pub fn read_from<R: BufRead>(mut reader: R, capacity: usize) -> io::Result<Self> {
		let max_len = capacity.saturating_sub(1);
		let mut store = Self::new();
		let mut hidden = false;
		let mut separators = 0usize;
		let mut line = Vec::new();

		loop {
			line.clear();
			if reader.read_until(b'\n', &mut line)? == 0 {
				break;
			}
			if line == b"\n" {
				hidden = !hidden;
				separators += 1;
				continue;
			}
			if line.last() == Some(&b'\n') {
				line.pop();
			}
			let text = String::from_utf8_lossy(&line);
			let end = floor_char_boundary(&text, max_len);
			store.push(&text[..end], hidden);
		}

		debug!(items = store.len(), separators, "loaded items");
		Ok(store)
	}

	/// Append an item at the end of the load order.
	pub fn push(&mut self, text: impl Into<String>, hidden: bool) {
		self.items.push(Item::new(text, hidden));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&Item> {
		self.items.get(index)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Item> {
		self.items.iter()
	}

	/// The first of the longest items, by byte length.
	#[must_use]
	pub fn longest(&self) -> Option<&Item> {
		self.items.iter().fold(None, |longest: Option<&Item>, item| match longest {
			Some(current) if current.text.len() >= item.text.len() => Some(current),
			_ => Some(item),
		})
	}

	pub(crate) fn mark_output(&mut self, index: usize) {
		if let Some(item) = self.items.get_mut(index) {
			item.output = true;
		}
	}
}

/// Largest code-point boundary of `text` that is not past `max`.
pub(crate) fn floor_char_boundary(text: &str, max: usize) -> usize {
	if max >= text.len() {
		return text.len();
	}
	let mut end = max;
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	end
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn texts(store: &ItemStore) -> Vec<(&str, bool)> {
		store.iter().map(|item| (item.text(), item.is_hidden())).collect()
	}

	#[test]
	fn blank_line_hides_following_items() {
		let store = ItemStore::read_from(Cursor::new("a\nb\n\nc\nd\n"), 64).unwrap();
		assert_eq!(
			texts(&store),
			vec![("a", false), ("b", false), ("c", true), ("d", true)]
		);
	}

	#[test]
	fn second_blank_line_shows_items_again() {
		let store = ItemStore::read_from(Cursor::new("a\n\nb\n\nc"), 64).unwrap();
		assert_eq!(texts(&store), vec![("a", false), ("b", true), ("c", false)]);
	}

	#[test]
	fn lines_keep_everything_but_the_trailing_newline() {
		let store = ItemStore::read_from(Cursor::new("  padded \r\n\ttab\nlast"), 64).unwrap();
		assert_eq!(
			texts(&store),
			vec![("  padded \r", false), ("\ttab", false), ("last", false)]
		);
	}

	#[test]
	fn whitespace_only_lines_are_items() {
		let store = ItemStore::read_from(Cursor::new(" \nx\n"), 64).unwrap();
		assert_eq!(texts(&store), vec![(" ", false), ("x", false)]);
	}

	#[test]
	fn long_lines_are_cut_on_code_point_boundaries() {
		let store = ItemStore::read_from(Cursor::new("abcdef\nabé\n"), 4).unwrap();
		// capacity 4 leaves room for 3 bytes; "é" is two bytes and would straddle it.
		assert_eq!(texts(&store), vec![("abc", false), ("ab", false)]);
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let store = ItemStore::read_from(Cursor::new(b"ok\n\xff\n".to_vec()), 64).unwrap();
		assert_eq!(store.get(1).map(Item::text), Some("\u{fffd}"));
	}

	#[test]
	fn from_lines_treats_empty_strings_as_separators() {
		let store = ItemStore::from_lines(["a", "", "b"]);
		assert_eq!(texts(&store), vec![("a", false), ("b", true)]);
	}

	#[test]
	fn longest_prefers_the_first_of_equal_lengths() {
		let store = ItemStore::from_lines(["ab", "cd", "e"]);
		assert_eq!(store.longest().map(Item::text), Some("ab"));
		assert!(ItemStore::new().longest().is_none());
	}

	#[test]
	fn mark_output_flags_a_single_item() {
		let mut store = ItemStore::from_lines(["a", "b"]);
		store.mark_output(1);
		assert!(!store.get(0).unwrap().is_output());
		assert!(store.get(1).unwrap().is_output());
	}
}
