mod cli;
mod settings;
mod workflow;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use cli::{OutputFormat, OutputSink, parse_cli};
use linepick::logging;
use linepick_core::Outcome;
use settings::ResolvedConfig;
use tracing::info;
use workflow::PickWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();
	let _log_guard = logging::initialize()?;

	if cli.list_themes {
		for theme in linepick_tui::style::descriptors() {
			if theme.aliases.is_empty() {
				println!("{}", theme.name);
			} else {
				println!("{} ({})", theme.name, theme.aliases.join(", "));
			}
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_picker(cli.output, resolved)
}

/// Run the picker, streaming accepted lines to stdout in the chosen format.
///
/// Exits with success after an accept and failure after a cancel.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<ExitCode> {
	let workflow = PickWorkflow::from_config(settings)?;
	let mut sink = OutputSink::new(format, io::stdout().lock());
	let outcome = workflow.run(&mut sink)?;
	info!(emitted = sink.emitted(), ?outcome, "session finished");

	Ok(match outcome {
		Outcome::Accepted(_) => ExitCode::SUCCESS,
		_ => ExitCode::FAILURE,
	})
}
