use serde::Deserialize;

use crate::cli::CliArgs;

/// `[matching]`: how the query is compared against items.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct MatchingSection {
	pub(super) case_insensitive: Option<bool>,
	pub(super) unitary: Option<bool>,
	pub(super) tab_complete: Option<bool>,
}

impl MatchingSection {
	/// Command line switches can only turn options on.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.case_insensitive {
			self.case_insensitive = Some(true);
		}
		if cli.unitary {
			self.unitary = Some(true);
		}
		if cli.tab_complete {
			self.tab_complete = Some(true);
		}
	}
}
