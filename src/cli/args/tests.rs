use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat, tinted_cli_command};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn command_supports_custom_styles() {
	let command = tinted_cli_command();
	assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["linepick"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(!parsed.bottom);
	assert_eq!(parsed.lines, None);
}

#[test]
fn short_flags_follow_the_classic_layout() {
	let parsed = CliArgs::parse_from([
		"linepick", "-b", "-i", "-l", "10", "-p", "run:", "-q", "fo", "-t", "-U",
	]);
	assert!(parsed.bottom);
	assert!(parsed.case_insensitive);
	assert!(parsed.tab_complete);
	assert!(parsed.unitary);
	assert_eq!(parsed.lines, Some(10));
	assert_eq!(parsed.prompt.as_deref(), Some("run:"));
	assert_eq!(parsed.query.as_deref(), Some("fo"));
}

#[test]
fn colours_and_output_format_parse() {
	let parsed = CliArgs::parse_from([
		"linepick",
		"--selected-bg",
		"#005577",
		"--output",
		"json",
		"--config",
		"a.toml",
		"--config",
		"b.toml",
	]);
	assert_eq!(parsed.selected_bg.as_deref(), Some("#005577"));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn rejects_non_numeric_line_counts() {
	assert!(CliArgs::try_parse_from(["linepick", "-l", "many"]).is_err());
}
