use anyhow::Result;
use linepick_core::{ItemStore, Outcome, Session, SessionOptions};

use crate::app::{App, Placement};
use crate::keymap::KeyBindings;
use crate::runtime::{self, Emission};
use crate::style::{ColorOverrides, Theme};

/// A small builder for configuring the overlay before running it.
///
/// Collects the items, session options and presentation settings, then
/// assembles an [`App`] for [`Picker::run`] or for drawing in tests.
pub struct Picker {
	store: ItemStore,
	options: SessionOptions,
	prompt: Option<String>,
	initial_query: Option<String>,
	theme: Theme,
	overrides: ColorOverrides,
	placement: Placement,
	keys: KeyBindings,
}

impl Picker {
	/// Create a picker over `store` with default options.
	#[must_use]
	pub fn new(store: ItemStore) -> Self {
		Self {
			store,
			options: SessionOptions::default(),
			prompt: None,
			initial_query: None,
			theme: Theme::default(),
			overrides: ColorOverrides::default(),
			placement: Placement::default(),
			keys: KeyBindings::default(),
		}
	}

	#[must_use]
	pub fn with_options(mut self, options: SessionOptions) -> Self {
		self.options = options;
		self
	}

	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = Some(prompt.into());
		self
	}

	/// Text the query starts with; it is matched before the first draw.
	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Colours layered over the theme.
	#[must_use]
	pub fn with_color_overrides(mut self, overrides: ColorOverrides) -> Self {
		self.overrides = overrides;
		self
	}

	#[must_use]
	pub fn with_placement(mut self, placement: Placement) -> Self {
		self.placement = placement;
		self
	}

	#[must_use]
	pub fn with_key_bindings(mut self, keys: KeyBindings) -> Self {
		self.keys = keys;
		self
	}

	/// Assemble the [`App`] without touching the terminal.
	#[must_use]
	pub fn build(self) -> App {
		let mut session = Session::new(self.store, self.options);
		if let Some(query) = self.initial_query.as_deref().filter(|query| !query.is_empty()) {
			session.set_query(query);
		}

		let mut app = App::new(session);
		if let Some(prompt) = self.prompt {
			app.set_prompt(prompt);
		}
		app.set_theme(self.overrides.apply(self.theme));
		app.set_placement(self.placement);
		app.set_key_bindings(self.keys);
		app
	}

	/// Run the overlay, handing every accepted line to `emit`.
	pub fn run<F>(self, emit: F) -> Result<Outcome>
	where
		F: FnMut(Emission) -> Result<()>,
	{
		runtime::run(self.build(), emit)
	}
}
