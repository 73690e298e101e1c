mod annotations;
mod definitions;
mod options;
mod styles;

use clap::{Command, CommandFactory, FromArgMatches};
pub(crate) use definitions::CliArgs;
pub(crate) use options::OutputFormat;

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

/// The generated clap command with muted help annotations.
pub(super) fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(annotations::dim_annotations)
}

#[cfg(test)]
mod tests;
