use ratatui::style::Style;
use thiserror::Error;

/// Colour schemes used by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Input field, unselected items and the empty background.
	pub normal: Style,
	/// The selected item.
	pub selected: Style,
	/// Items already printed during a multi-accept session.
	pub output: Style,
	/// The prompt label.
	pub prompt: Style,
}

impl Theme {
	/// Style for an item; the selection wins over the output marking.
	#[must_use]
	pub fn item_style(&self, selected: bool, output: bool) -> Style {
		if selected {
			self.selected
		} else if output {
			self.output
		} else {
			self.normal
		}
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` is this theme's name or one of its aliases, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	/// The name of the theme.
	pub name: String,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
	/// The theme configuration.
	pub theme: Theme,
}

/// Problems resolving a theme or one of its colours.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
	#[error("unknown theme `{name}` (available: {available})")]
	UnknownTheme { name: String, available: String },
	#[error("invalid colour `{value}`: {reason}")]
	InvalidColor { value: String, reason: String },
}

impl ThemeError {
	pub(crate) fn invalid_color(value: &str, reason: impl Into<String>) -> Self {
		Self::InvalidColor {
			value: value.to_string(),
			reason: reason.into(),
		}
	}
}
