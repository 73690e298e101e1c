use serde::Deserialize;

use crate::cli::CliArgs;

/// `[input]`: the query field and its key handling.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InputSection {
	pub(super) delete_cancels: Option<bool>,
	pub(super) query_capacity: Option<usize>,
	pub(super) initial_query: Option<String>,
}

impl InputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.delete_cancels {
			self.delete_cancels = Some(true);
		}
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
	}
}
