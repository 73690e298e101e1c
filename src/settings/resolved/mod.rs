use std::path::PathBuf;

use linepick_core::SessionOptions;
use linepick_tui::{ColorOverrides, Placement, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{resolve_color, resolve_theme};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	/// Item source; `None` reads stdin.
	pub(crate) input: Option<PathBuf>,
	pub(crate) session: SessionOptions,
	pub(crate) delete_cancels: bool,
	pub(crate) initial_query: String,
	pub(crate) prompt: Option<String>,
	pub(crate) placement: Placement,
	pub(crate) theme_name: String,
	pub(crate) theme: Theme,
	pub(crate) colors: ColorOverrides,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration to stderr.
	pub(crate) fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			eprintln!("{line}");
		}
	}
}
