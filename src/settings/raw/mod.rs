use anyhow::{Error, Result};
use linepick_core::{CaseSensitivity, DEFAULT_QUERY_CAPACITY, MatchOptions, SessionOptions};
use linepick_tui::Placement;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, resolve_theme};
use super::util::non_empty;
use crate::cli::CliArgs;

mod input;
mod matching;
mod ui;

use input::InputSection;
use matching::MatchingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	matching: MatchingSection,
	input: InputSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.matching.apply_cli_overrides(cli);
		self.input.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			query_capacity: self.input.query_capacity.is_some().then(|| {
				SettingSource::detect(
					None,
					"LINEPICK__INPUT__QUERY_CAPACITY",
					"input.query_capacity",
				)
			}),
		};

		let theme_name = non_empty(self.ui.theme.clone());
		let theme = resolve_theme(theme_name.as_deref(), || {
			SettingSource::detect(
				cli.theme.as_ref().map(|_| "--theme"),
				"LINEPICK__UI__THEME",
				"ui.theme",
			)
		})?;
		let colors = self.ui.colors.resolve(cli)?;

		let session = SessionOptions {
			matching: MatchOptions {
				case: CaseSensitivity::from_insensitive(
					self.matching.case_insensitive.unwrap_or(false),
				),
				unitary: self.matching.unitary.unwrap_or(false),
			},
			tab_complete: self.matching.tab_complete.unwrap_or(false),
			lines: self.ui.lines.unwrap_or(0),
			query_capacity: self.input.query_capacity.unwrap_or(DEFAULT_QUERY_CAPACITY),
		};
		let placement = if self.ui.bottom.unwrap_or(false) {
			Placement::Bottom
		} else {
			Placement::Top
		};

		let config = ResolvedConfig {
			input: cli.input.clone(),
			session,
			delete_cancels: self.input.delete_cancels.unwrap_or(false),
			initial_query: self.input.initial_query.unwrap_or_default(),
			prompt: non_empty(self.ui.prompt),
			placement,
			theme_name: theme_name.unwrap_or_else(|| "default".to_string()),
			theme,
			colors,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

#[cfg(test)]
mod tests;
