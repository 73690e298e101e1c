//! Key bindings from terminal key events to session commands.

use linepick_core::{Command, CursorMove, SelectionMove};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The key table, with its one configurable switch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyBindings {
	/// Ctrl-D cancels and Delete deletes backwards.
	pub delete_cancels: bool,
}

impl KeyBindings {
	#[must_use]
	pub fn new(delete_cancels: bool) -> Self {
		Self { delete_cancels }
	}

	/// Command bound to `key`, if any.
	///
	/// `repeat` is set when the previous key press was itself a completion,
	/// and is carried into [`Command::Complete`].
	#[must_use]
	pub fn command_for(&self, key: KeyEvent, repeat: bool) -> Option<Command> {
		let modifiers = key.modifiers;
		let shift = modifiers.contains(KeyModifiers::SHIFT);

		if modifiers.contains(KeyModifiers::CONTROL) {
			return self.control(key.code, shift, repeat);
		}
		if modifiers.contains(KeyModifiers::ALT) {
			return alt(key.code, shift);
		}

		let command = match key.code {
			KeyCode::Char(ch) if !ch.is_control() => Command::Insert(ch.to_string()),
			KeyCode::Backspace => Command::DeleteBackward,
			KeyCode::Delete if self.delete_cancels => Command::DeleteBackward,
			KeyCode::Delete => Command::DeleteForward,
			KeyCode::Left => Command::MoveCursor(CursorMove::Left),
			KeyCode::Right => Command::MoveCursor(CursorMove::Right),
			KeyCode::Home => Command::MoveCursor(CursorMove::Home),
			KeyCode::End => Command::MoveCursor(CursorMove::End),
			KeyCode::Up => Command::MoveSelection(SelectionMove::Up),
			KeyCode::Down => Command::MoveSelection(SelectionMove::Down),
			KeyCode::PageUp => Command::PageUp,
			KeyCode::PageDown => Command::PageDown,
			KeyCode::Tab | KeyCode::BackTab => Command::Complete { repeat },
			KeyCode::Enter => Command::Accept {
				keep_open: false,
				literal: shift,
			},
			KeyCode::Esc => Command::Cancel,
			_ => return None,
		};
		Some(command)
	}

	fn control(&self, code: KeyCode, shift: bool, repeat: bool) -> Option<Command> {
		let ch = match code {
			KeyCode::Enter => {
				return Some(Command::Accept {
					keep_open: true,
					literal: shift,
				});
			}
			KeyCode::Char(ch) => ch,
			_ => return None,
		};

		let command = match ch.to_ascii_lowercase() {
			'a' => Command::MoveCursor(CursorMove::Home),
			'b' => Command::MoveCursor(CursorMove::Left),
			'c' | 'g' | '[' => Command::Cancel,
			'd' if self.delete_cancels => Command::Cancel,
			'd' => Command::DeleteForward,
			'e' => Command::MoveCursor(CursorMove::End),
			'f' => Command::MoveCursor(CursorMove::Right),
			'h' => Command::DeleteBackward,
			'i' => Command::Complete { repeat },
			'j' | 'm' => Command::Accept {
				keep_open: false,
				literal: shift || ch.is_ascii_uppercase(),
			},
			'k' => Command::DeleteToEnd,
			'n' => Command::MoveSelection(SelectionMove::Down),
			'p' => Command::MoveSelection(SelectionMove::Up),
			'u' => Command::DeleteToStart,
			'w' => Command::DeleteWord,
			_ => return None,
		};
		Some(command)
	}
}

/// Alt bindings. Alt-Enter keeps the overlay open on terminals that send
/// Ctrl-Enter as a plain carriage return.
fn alt(code: KeyCode, shift: bool) -> Option<Command> {
	let ch = match code {
		KeyCode::Enter => {
			return Some(Command::Accept {
				keep_open: true,
				literal: shift,
			});
		}
		KeyCode::Char(ch) => ch,
		_ => return None,
	};
	let command = match ch {
		'g' => Command::MoveCursor(CursorMove::Home),
		'G' => Command::MoveCursor(CursorMove::End),
		'h' => Command::MoveSelection(SelectionMove::Up),
		'j' => Command::PageDown,
		'k' => Command::PageUp,
		'l' => Command::MoveSelection(SelectionMove::Down),
		_ => return None,
	};
	Some(command)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn plain(code: KeyCode) -> Option<Command> {
		KeyBindings::default().command_for(key(code, KeyModifiers::NONE), false)
	}

	fn ctrl(ch: char) -> Option<Command> {
		KeyBindings::default().command_for(key(KeyCode::Char(ch), KeyModifiers::CONTROL), false)
	}

	#[test]
	fn printable_characters_insert() {
		assert_eq!(plain(KeyCode::Char('x')), Some(Command::Insert("x".into())));
		assert_eq!(
			KeyBindings::default().command_for(key(KeyCode::Char('X'), KeyModifiers::SHIFT), false),
			Some(Command::Insert("X".into()))
		);
		assert_eq!(plain(KeyCode::Char('é')), Some(Command::Insert("é".into())));
	}

	#[test]
	fn emacs_style_control_keys() {
		assert_eq!(ctrl('a'), Some(Command::MoveCursor(CursorMove::Home)));
		assert_eq!(ctrl('e'), Some(Command::MoveCursor(CursorMove::End)));
		assert_eq!(ctrl('u'), Some(Command::DeleteToStart));
		assert_eq!(ctrl('k'), Some(Command::DeleteToEnd));
		assert_eq!(ctrl('w'), Some(Command::DeleteWord));
		assert_eq!(ctrl('n'), Some(Command::MoveSelection(SelectionMove::Down)));
		assert_eq!(ctrl('p'), Some(Command::MoveSelection(SelectionMove::Up)));
		assert_eq!(ctrl('c'), Some(Command::Cancel));
		assert_eq!(ctrl('['), Some(Command::Cancel));
		assert_eq!(ctrl('z'), None);
	}

	#[test]
	fn enter_variants_choose_literal_and_keep_open() {
		assert_eq!(
			plain(KeyCode::Enter),
			Some(Command::Accept { keep_open: false, literal: false })
		);
		assert_eq!(
			KeyBindings::default().command_for(key(KeyCode::Enter, KeyModifiers::SHIFT), false),
			Some(Command::Accept { keep_open: false, literal: true })
		);
		assert_eq!(
			KeyBindings::default().command_for(key(KeyCode::Enter, KeyModifiers::CONTROL), false),
			Some(Command::Accept { keep_open: true, literal: false })
		);
		assert_eq!(ctrl('j'), Some(Command::Accept { keep_open: false, literal: false }));
		assert_eq!(ctrl('M'), Some(Command::Accept { keep_open: false, literal: true }));
	}

	#[test]
	fn alt_enter_keeps_the_overlay_open() {
		let bindings = KeyBindings::default();
		assert_eq!(
			bindings.command_for(key(KeyCode::Enter, KeyModifiers::ALT), false),
			Some(Command::Accept { keep_open: true, literal: false })
		);
		assert_eq!(
			bindings.command_for(key(KeyCode::Enter, KeyModifiers::ALT | KeyModifiers::SHIFT), false),
			Some(Command::Accept { keep_open: true, literal: true })
		);
	}

	#[test]
	fn delete_cancels_rebinds_delete_keys() {
		let bindings = KeyBindings::new(true);
		assert_eq!(
			bindings.command_for(key(KeyCode::Char('d'), KeyModifiers::CONTROL), false),
			Some(Command::Cancel)
		);
		assert_eq!(
			bindings.command_for(key(KeyCode::Delete, KeyModifiers::NONE), false),
			Some(Command::DeleteBackward)
		);
		assert_eq!(ctrl('d'), Some(Command::DeleteForward));
		assert_eq!(plain(KeyCode::Delete), Some(Command::DeleteForward));
	}

	#[test]
	fn tab_carries_the_repeat_flag() {
		let bindings = KeyBindings::default();
		assert_eq!(
			bindings.command_for(key(KeyCode::Tab, KeyModifiers::NONE), true),
			Some(Command::Complete { repeat: true })
		);
		assert_eq!(
			bindings.command_for(key(KeyCode::BackTab, KeyModifiers::SHIFT), false),
			Some(Command::Complete { repeat: false })
		);
		assert_eq!(ctrl('i'), Some(Command::Complete { repeat: false }));
	}

	#[test]
	fn alt_keys_navigate() {
		let bindings = KeyBindings::default();
		let alt = |ch| bindings.command_for(key(KeyCode::Char(ch), KeyModifiers::ALT), false);
		assert_eq!(alt('g'), Some(Command::MoveCursor(CursorMove::Home)));
		assert_eq!(alt('G'), Some(Command::MoveCursor(CursorMove::End)));
		assert_eq!(alt('j'), Some(Command::PageDown));
		assert_eq!(alt('k'), Some(Command::PageUp));
		assert_eq!(alt('l'), Some(Command::MoveSelection(SelectionMove::Down)));
		assert_eq!(alt('x'), None);
	}
}
