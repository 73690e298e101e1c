use linepick_core::{Command, Outcome};
use ratatui::crossterm::event::KeyEvent;
use tracing::trace;

use super::App;

impl App {
	/// Process a key press and report what the session asks for next.
	pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
		let command = self.keys.command_for(key, self.last_was_complete);
		self.last_was_complete = matches!(command, Some(Command::Complete { .. }));

		match command {
			Some(command) => self.session.apply(command),
			None => {
				trace!(?key, "unbound key");
				Outcome::Continue
			}
		}
	}

	/// Insert pasted text up to its first line break.
	pub fn handle_paste(&mut self, text: &str) -> Outcome {
		self.last_was_complete = false;
		self.session.apply(Command::Paste(text.to_owned()))
	}
}
