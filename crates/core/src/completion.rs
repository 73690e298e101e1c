//! Shell-style completion of the query from the visible page.

use tracing::debug;

use crate::compare::CaseSensitivity;

/// Result of trying to grow the query to the common prefix of visible items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
	/// The query can be replaced by this longer (or equal) text.
	Extended(String),
	/// Visible candidates diverge right after the query; keep it as is.
	Stalled,
	/// Nothing to complete from; the caller falls back to the selected item.
	Unavailable,
}

/// Longest common prefix of the `visible` texts that start with `query`.
///
/// Only candidates starting with `query` take part. The prefix grows one
/// byte at a time from the end of the query, bounded by the shortest
/// candidate, and stops where two candidates disagree. A boundary inside a
/// multi-byte sequence is moved back to the previous code point.
///
/// When the candidates disagree immediately, a first attempt reports
/// [`Completion::Stalled`] and a `repeat` attempt reports
/// [`Completion::Unavailable`].
#[must_use]
pub fn common_prefix(
	visible: &[&str],
	query: &str,
	repeat: bool,
	case: CaseSensitivity,
) -> Completion {
	if query.is_empty() {
		return Completion::Unavailable;
	}

	let candidates: Vec<&str> = visible
		.iter()
		.copied()
		.filter(|text| case.starts_with(text, query))
		.collect();
	let Some(&first) = candidates.first() else {
		return Completion::Unavailable;
	};

	let start = query.len();
	let bound = candidates
		.iter()
		.map(|text| text.len())
		.min()
		.unwrap_or(start);

	let mut len = start;
	while len < bound {
		let byte = first.as_bytes()[len];
		if candidates.iter().any(|text| text.as_bytes()[len] != byte) {
			break;
		}
		len += 1;
	}

	let mut end = len;
	while !first.is_char_boundary(end) {
		end -= 1;
	}

	if end == start && len < bound {
		debug!(candidates = candidates.len(), repeat, "completion stalled");
		return if repeat {
			Completion::Unavailable
		} else {
			Completion::Stalled
		};
	}

	Completion::Extended(first[..end].to_owned())
}
