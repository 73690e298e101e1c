//! Application runtime and event loop.

use std::io::{self, Stderr, Write};

use anyhow::{Context, Result};
use linepick_core::Outcome;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
	KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
	supports_keyboard_enhancement,
};
use tracing::{debug, info};

use crate::App;

/// Text handed to the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
	pub text: String,
	/// Set when the overlay stays open after this line.
	pub keep_open: bool,
}

/// Run `app` to completion, passing every accepted line to `emit`.
///
/// Returns the final [`Outcome`]: either [`Outcome::Accepted`] or
/// [`Outcome::Cancelled`].
pub fn run<F>(mut app: App, emit: F) -> Result<Outcome>
where
	F: FnMut(Emission) -> Result<()>,
{
	app.run(emit)
}

impl App {
	/// Pump the terminal event loop until the user accepts or cancels.
	pub fn run<F>(&mut self, mut emit: F) -> Result<Outcome>
	where
		F: FnMut(Emission) -> Result<()>,
	{
		let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;
		let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
		terminal.clear()?;

		loop {
			terminal.draw(|frame| self.draw(frame))?;

			let outcome = match event::read()? {
				Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
				Event::Paste(text) => self.handle_paste(&text),
				Event::Resize(width, height) => {
					debug!(width, height, "terminal resized");
					continue;
				}
				_ => continue,
			};

			match outcome {
				Outcome::Continue => {}
				Outcome::Emitted(text) => emit(Emission {
					text,
					keep_open: true,
				})?,
				Outcome::Accepted(text) => {
					info!(len = text.len(), "accepted");
					emit(Emission {
						text: text.clone(),
						keep_open: false,
					})?;
					return Ok(Outcome::Accepted(text));
				}
				Outcome::Cancelled => {
					info!("cancelled");
					return Ok(Outcome::Cancelled);
				}
			}
		}
	}
}

/// Raw mode and the alternate screen on stderr for as long as it lives.
///
/// Terminals that speak the keyboard enhancement protocol are asked to
/// disambiguate modified keys, so Shift-Enter and Ctrl-Enter arrive with
/// their modifiers instead of as a bare carriage return.
struct TerminalGuard {
	out: Stderr,
	enhanced_keys: bool,
}

impl TerminalGuard {
	fn enter() -> io::Result<Self> {
		enable_raw_mode()?;
		let mut out = io::stderr();
		if let Err(err) = execute!(out, EnterAlternateScreen, EnableBracketedPaste) {
			let _ = disable_raw_mode();
			return Err(err);
		}

		let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false)
			&& execute!(
				out,
				PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
			)
			.is_ok();
		debug!(enhanced_keys, "terminal ready");
		Ok(Self { out, enhanced_keys })
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		if self.enhanced_keys {
			let _ = execute!(self.out, PopKeyboardEnhancementFlags);
		}
		let _ = execute!(self.out, DisableBracketedPaste, LeaveAlternateScreen);
		let _ = self.out.flush();
		let _ = disable_raw_mode();
	}
}
