use clap::Parser;
use linepick_core::{CaseSensitivity, DEFAULT_QUERY_CAPACITY};
use linepick_tui::Placement;
use linepick_tui::style::Color;

use super::RawConfig;
use crate::cli::CliArgs;

fn resolve(args: &[&str]) -> anyhow::Result<super::ResolvedConfig> {
	let cli = CliArgs::parse_from(args);
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	raw.resolve(&cli)
}

#[test]
fn defaults_match_the_classic_picker() {
	let config = resolve(&["linepick"]).expect("resolves");
	assert_eq!(config.session.matching.case, CaseSensitivity::Sensitive);
	assert!(!config.session.matching.unitary);
	assert!(!config.session.tab_complete);
	assert_eq!(config.session.lines, 0);
	assert_eq!(config.session.query_capacity, DEFAULT_QUERY_CAPACITY);
	assert_eq!(config.placement, Placement::Top);
	assert_eq!(config.prompt, None);
	assert_eq!(config.theme_name, "default");
	assert!(config.colors.is_empty());
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"linepick",
		"-b",
		"-i",
		"-t",
		"--delete-cancels",
		"-l",
		"5",
		"-p",
		"go",
		"-q",
		"start",
		"--theme",
		"light",
		"--output-fg",
		"red",
	]);

	let mut raw = RawConfig::default();
	raw.ui.lines = Some(20);
	raw.ui.prompt = Some("file".into());
	raw.input.initial_query = Some("file query".into());
	raw.apply_cli_overrides(&cli);

	assert_eq!(raw.ui.lines, Some(5));
	assert_eq!(raw.ui.prompt.as_deref(), Some("go"));
	assert_eq!(raw.input.initial_query.as_deref(), Some("start"));
	assert_eq!(raw.ui.colors.output_fg.as_deref(), Some("red"));

	let config = raw.resolve(&cli).expect("resolves");
	assert_eq!(config.placement, Placement::Bottom);
	assert_eq!(config.session.matching.case, CaseSensitivity::Insensitive);
	assert!(config.session.tab_complete);
	assert!(config.delete_cancels);
	assert_eq!(config.theme_name, "light");
	assert_eq!(config.colors.output_fg, Some(Color::Red));
}

#[test]
fn switches_left_off_keep_file_values() {
	let cli = CliArgs::parse_from(["linepick"]);
	let mut raw = RawConfig::default();
	raw.matching.unitary = Some(true);
	raw.ui.bottom = Some(true);
	raw.apply_cli_overrides(&cli);

	let config = raw.resolve(&cli).expect("resolves");
	assert!(config.session.matching.unitary);
	assert_eq!(config.placement, Placement::Bottom);
}

#[test]
fn empty_prompt_means_no_prompt() {
	let config = resolve(&["linepick", "-p", ""]).expect("resolves");
	assert_eq!(config.prompt, None);
}

#[test]
fn bad_colour_from_the_cli_names_the_flag() {
	let message = resolve(&["linepick", "--selected-bg", "#12345"])
		.expect_err("rejected")
		.to_string();
	assert!(message.contains("ui.colors.selected_bg"), "{message}");
	assert!(message.contains("CLI flag `--selected-bg`"), "{message}");
}

#[test]
fn unknown_theme_is_rejected() {
	let message = resolve(&["linepick", "--theme", "neon"])
		.expect_err("rejected")
		.to_string();
	assert!(message.contains("unknown theme `neon`"), "{message}");
}

#[test]
fn theme_aliases_resolve() {
	let config = resolve(&["linepick", "--theme", "dmenu"]).expect("resolves");
	assert_eq!(config.theme, linepick_tui::default_theme());
}
