use clap::ValueEnum;

/// How accepted lines are written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// The text followed by a newline.
	#[default]
	Plain,
	/// One JSON object per line.
	Json,
}
