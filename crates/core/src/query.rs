//! Bounded query text with a code-point aware cursor.

use crate::error::EditError;
use crate::items::floor_char_boundary;

/// The text typed so far and the cursor inside it.
///
/// The cursor is a byte offset that always sits on a code-point boundary,
/// and the text never grows past `capacity - 1` bytes. Every edit either
/// applies completely or leaves the buffer untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuffer {
	text: String,
	cursor: usize,
	capacity: usize,
}

impl QueryBuffer {
	#[must_use]
	pub fn new(capacity: usize) -> Self {
		Self {
			text: String::new(),
			cursor: 0,
			capacity,
		}
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	#[must_use]
	pub fn at_start(&self) -> bool {
		self.cursor == 0
	}

	#[must_use]
	pub fn at_end(&self) -> bool {
		self.cursor == self.text.len()
	}

	/// Text left of the cursor.
	#[must_use]
	pub fn before_cursor(&self) -> &str {
		&self.text[..self.cursor]
	}

	fn max_len(&self) -> usize {
		self.capacity.saturating_sub(1)
	}

	/// Insert `text` at the cursor and move the cursor past it.
	pub fn insert(&mut self, text: &str) -> Result<(), EditError> {
		if self.text.len().saturating_add(text.len()) > self.max_len() {
			return Err(EditError::CapacityExceeded {
				len: self.text.len(),
				attempted: text.len(),
				capacity: self.capacity,
			});
		}
		self.text.insert_str(self.cursor, text);
		self.cursor += text.len();
		Ok(())
	}

	/// Replace the whole text, truncated to fit, and put the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		let end = floor_char_boundary(text, self.max_len());
		self.text.clear();
		self.text.push_str(&text[..end]);
		self.cursor = self.text.len();
	}

	/// Remove the code point left of the cursor.
	pub fn delete_backward(&mut self) -> bool {
		if self.at_start() {
			return false;
		}
		let start = self.previous_boundary();
		self.remove(start..self.cursor)
	}

	/// Remove the code point right of the cursor.
	pub fn delete_forward(&mut self) -> bool {
		if self.at_end() {
			return false;
		}
		let end = self.next_boundary();
		self.remove(self.cursor..end)
	}

	/// Remove everything left of the cursor.
	pub fn delete_to_start(&mut self) -> bool {
		self.remove(0..self.cursor)
	}

	/// Remove everything right of the cursor.
	pub fn delete_to_end(&mut self) -> bool {
		self.remove(self.cursor..self.text.len())
	}

	/// Remove the word left of the cursor along with the spaces after it.
	pub fn delete_word(&mut self) -> bool {
		let bytes = self.text.as_bytes();
		let mut start = self.cursor;
		while start > 0 && bytes[start - 1] == b' ' {
			start -= 1;
		}
		while start > 0 && bytes[start - 1] != b' ' {
			start -= 1;
		}
		self.remove(start..self.cursor)
	}

	pub fn move_left(&mut self) -> bool {
		if self.at_start() {
			return false;
		}
		self.cursor = self.previous_boundary();
		true
	}

	pub fn move_right(&mut self) -> bool {
		if self.at_end() {
			return false;
		}
		self.cursor = self.next_boundary();
		true
	}

	pub fn move_home(&mut self) -> bool {
		let moved = !self.at_start();
		self.cursor = 0;
		moved
	}

	pub fn move_end(&mut self) -> bool {
		let moved = !self.at_end();
		self.cursor = self.text.len();
		moved
	}

	fn remove(&mut self, range: std::ops::Range<usize>) -> bool {
		if range.is_empty() {
			return false;
		}
		let start = range.start;
		let removed = range.len();
		self.text.replace_range(range, "");
		if self.cursor > start {
			self.cursor = self.cursor.saturating_sub(removed).max(start);
		}
		true
	}

	fn previous_boundary(&self) -> usize {
		self.text[..self.cursor]
			.chars()
			.next_back()
			.map_or(0, |ch| self.cursor - ch.len_utf8())
	}

	fn next_boundary(&self) -> usize {
		self.text[self.cursor..]
			.chars()
			.next()
			.map_or(self.cursor, |ch| self.cursor + ch.len_utf8())
	}
}
