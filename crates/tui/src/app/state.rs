//! State container for the overlay front end.

use linepick_core::{CellMeasure, Measure, Session};

use crate::keymap::KeyBindings;
use crate::style::{StyleConfig, Theme};

/// Screen edge the overlay is drawn against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
	#[default]
	Top,
	Bottom,
}

/// The session being picked from plus everything needed to draw it and
/// feed it keys.
pub struct App {
	pub(crate) session: Session,
	pub(crate) keys: KeyBindings,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) prompt: Option<String>,
	pub(crate) placement: Placement,
	/// Cells taken by the widest item, padding included.
	pub(crate) widest_item: usize,
	/// Whether the previous key press was a completion.
	pub(crate) last_was_complete: bool,
}

impl App {
	#[must_use]
	pub fn new(session: Session) -> Self {
		let widest_item = session
			.store()
			.longest()
			.map_or(0, |item| CellMeasure::default().width(item.text()));

		Self {
			session,
			keys: KeyBindings::default(),
			style: StyleConfig::default(),
			prompt: None,
			placement: Placement::default(),
			widest_item,
			last_was_complete: false,
		}
	}

	#[must_use]
	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Label drawn left of the input field; empty text hides it.
	pub fn set_prompt(&mut self, prompt: impl Into<String>) {
		let prompt = prompt.into();
		self.prompt = (!prompt.is_empty()).then_some(prompt);
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style = StyleConfig::with_theme(theme);
	}

	pub fn set_placement(&mut self, placement: Placement) {
		self.placement = placement;
	}

	pub fn set_key_bindings(&mut self, keys: KeyBindings) {
		self.keys = keys;
	}
}
