use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `linepick` binary.
#[derive(Parser, Debug, Default)]
#[command(
	name = "linepick",
	version,
	long_version = long_version(),
	about = "Pick a line from stdin by typing part of it",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LINEPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Read items from a file instead of stdin"
	)]
	pub(crate) input: Option<PathBuf>,
	#[arg(short = 'b', long, help = "Draw the overlay at the bottom of the screen")]
	pub(crate) bottom: bool,
	#[arg(short = 'i', long = "case-insensitive", help = "Match case-insensitively")]
	pub(crate) case_insensitive: bool,
	#[arg(
		short = 'U',
		long,
		help = "Match the whole query as one token instead of splitting on spaces"
	)]
	pub(crate) unitary: bool,
	#[arg(
		short = 't',
		long = "tab-complete",
		help = "Complete the query to the longest prefix shared by the visible matches"
	)]
	pub(crate) tab_complete: bool,
	#[arg(
		long = "delete-cancels",
		help = "Make Ctrl-D cancel and Delete erase backwards"
	)]
	pub(crate) delete_cancels: bool,
	#[arg(
		short = 'l',
		long,
		value_name = "NUM",
		help = "List matches vertically in NUM rows (default: 0, one line)"
	)]
	pub(crate) lines: Option<usize>,
	#[arg(
		short = 'p',
		long,
		value_name = "TEXT",
		help = "Label drawn left of the input field (default: none)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Start with this query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: default)")]
	pub(crate) theme: Option<String>,
	#[arg(long = "normal-bg", value_name = "COLOR", help = "Background of the input and items")]
	pub(crate) normal_bg: Option<String>,
	#[arg(long = "normal-fg", value_name = "COLOR", help = "Foreground of the input and items")]
	pub(crate) normal_fg: Option<String>,
	#[arg(long = "selected-bg", value_name = "COLOR", help = "Background of the selected item")]
	pub(crate) selected_bg: Option<String>,
	#[arg(long = "selected-fg", value_name = "COLOR", help = "Foreground of the selected item")]
	pub(crate) selected_fg: Option<String>,
	#[arg(long = "output-bg", value_name = "COLOR", help = "Background of items already printed")]
	pub(crate) output_bg: Option<String>,
	#[arg(long = "output-fg", value_name = "COLOR", help = "Foreground of items already printed")]
	pub(crate) output_fg: Option<String>,
	#[arg(long = "print-config", help = "Print the resolved configuration to stderr before running")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how accepted lines are printed"
	)]
	pub(crate) output: OutputFormat,
}
