//! Visual styling utilities.
//!
//! Themes hold the four colour schemes the overlay draws with. Command line
//! and configuration colour overrides are layered on top of the chosen theme.

/// Theme definitions, built-in themes and colour parsing.
pub mod theme;

pub use ratatui::style::Color;

pub use theme::{
	ColorOverrides, Theme, ThemeDescriptor, ThemeError, ThemeRegistration, builtin_themes,
	by_name, default_theme, descriptors, names, parse_color, resolve,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the overlay.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
