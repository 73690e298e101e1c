use thiserror::Error;

/// Edits the query buffer refuses to apply.
///
/// A rejected edit leaves the buffer exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
	/// The insertion would grow the query past its fixed capacity.
	#[error("inserting {attempted} bytes into a {len}-byte query would exceed its {capacity}-byte capacity")]
	CapacityExceeded {
		len: usize,
		attempted: usize,
		capacity: usize,
	},
}
