//! Semantic commands a [`Session`](crate::Session) understands.
//!
//! Commands are independent of any key binding; the front end decides which
//! key produces which command.

/// Text cursor movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
	Left,
	Right,
	/// Start of text, or the first match when already there.
	Home,
	/// End of text, or the last match when already there.
	End,
}

/// Selection movements through the match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
	Up,
	Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Insert(String),
	/// Insert text up to its first newline.
	Paste(String),
	DeleteBackward,
	DeleteForward,
	DeleteToStart,
	DeleteToEnd,
	DeleteWord,
	MoveCursor(CursorMove),
	MoveSelection(SelectionMove),
	PageUp,
	PageDown,
	/// Complete the query; `repeat` is set when the previous command was
	/// also a completion.
	Complete { repeat: bool },
	/// Emit the selection, or the query text when nothing is selected or
	/// `literal` is set. `keep_open` continues the session afterwards.
	Accept { keep_open: bool, literal: bool },
	Cancel,
}

/// What a command asks the caller to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
	/// Keep reading input.
	Continue,
	/// Write this text and keep reading input.
	Emitted(String),
	/// Write this text and finish successfully.
	Accepted(String),
	/// Finish without output.
	Cancelled,
}

impl Outcome {
	/// Whether the session is over.
	#[must_use]
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Accepted(_) | Self::Cancelled)
	}
}
