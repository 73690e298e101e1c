//! Tiered substring matching over the item store.
//!
//! Every query change rebuilds a [`MatchList`] from scratch: items that
//! contain every query token survive, and are ordered exact matches first,
//! then prefix matches, then plain substring matches. Inside a tier the load
//! order of the store is preserved.

use tracing::debug;

use crate::compare::CaseSensitivity;
use crate::items::{Item, ItemStore};

/// Options that change which items match and how they compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
	pub case: CaseSensitivity,
	/// Treat a non-empty query as one phrase instead of space-separated words.
	pub unitary: bool,
}

/// Ranking class of a matching item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
	/// The item equals the first token, or the query is empty and the item is visible.
	Exact,
	/// The first token is a prefix of the item.
	Prefix,
	/// Every token occurs somewhere in the item.
	Substring,
}

/// Split `query` into match tokens.
///
/// Tokens are separated by ASCII spaces and empty tokens are dropped. In
/// unitary mode a query with at least one token is kept whole, spaces
/// included.
#[must_use]
pub fn tokenize(query: &str, unitary: bool) -> Vec<&str> {
	let tokens: Vec<&str> = query.split(' ').filter(|token| !token.is_empty()).collect();
	if unitary && !tokens.is_empty() {
		vec![query]
	} else {
		tokens
	}
}

/// Ranked view over an [`ItemStore`].
///
/// Entries are store indices; a position in the list is its index here, and
/// the neighbours of a position are the adjacent positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchList {
	entries: Vec<usize>,
}

impl MatchList {
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Store index of the item at `position`.
	#[must_use]
	pub fn item_index(&self, position: usize) -> Option<usize> {
		self.entries.get(position).copied()
	}

	/// Store indices in ranked order.
	#[must_use]
	pub fn indices(&self) -> &[usize] {
		&self.entries
	}

	#[must_use]
	pub fn head(&self) -> Option<usize> {
		(!self.entries.is_empty()).then_some(0)
	}

	#[must_use]
	pub fn tail(&self) -> Option<usize> {
		self.entries.len().checked_sub(1)
	}

	/// The position before `position`, if any.
	#[must_use]
	pub fn left(&self, position: usize) -> Option<usize> {
		position.checked_sub(1).filter(|left| *left < self.entries.len())
	}

	/// The position after `position`, if any.
	#[must_use]
	pub fn right(&self, position: usize) -> Option<usize> {
		let right = position + 1;
		(right < self.entries.len()).then_some(right)
	}

	/// Texts of the matched items in ranked order.
	pub fn texts<'a>(&'a self, store: &'a ItemStore) -> impl Iterator<Item = &'a str> + 'a {
		self.entries
			.iter()
			.filter_map(|index| store.get(*index))
			.map(Item::text)
	}
}

/// Builds [`MatchList`]s for query text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
	options: MatchOptions,
}

impl Matcher {
	#[must_use]
	pub fn new(options: MatchOptions) -> Self {
		Self { options }
	}

	#[must_use]
	pub fn options(&self) -> MatchOptions {
		self.options
	}

	/// Match `query` against every item of `store`.
	#[must_use]
	pub fn run(&self, query: &str, store: &ItemStore) -> MatchList {
		let tokens = tokenize(query, self.options.unitary);
		let mut exact = Vec::new();
		let mut prefix = Vec::new();
		let mut substring = Vec::new();

		for (index, item) in store.iter().enumerate() {
			match self.classify(&tokens, item) {
				Some(Tier::Exact) => exact.push(index),
				Some(Tier::Prefix) => prefix.push(index),
				Some(Tier::Substring) => substring.push(index),
				None => {}
			}
		}

		debug!(
			tokens = tokens.len(),
			exact = exact.len(),
			prefix = prefix.len(),
			substring = substring.len(),
			"rebuilt match list"
		);

		let mut entries = exact;
		entries.append(&mut prefix);
		entries.append(&mut substring);
		MatchList { entries }
	}

	/// Tier of `item` for already tokenized query text, or `None` when it
	/// does not match.
	#[must_use]
	pub fn classify(&self, tokens: &[&str], item: &Item) -> Option<Tier> {
		let case = self.options.case;
		let text = item.text();

		let Some(first) = tokens.first() else {
			return (!item.is_hidden()).then_some(Tier::Exact);
		};
		if !tokens.iter().all(|token| case.contains(text, token)) {
			return None;
		}

		if case.equals(text, first) {
			Some(Tier::Exact)
		} else if case.starts_with(text, first) {
			Some(Tier::Prefix)
		} else {
			Some(Tier::Substring)
		}
	}
}
