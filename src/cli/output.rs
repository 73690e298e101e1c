use std::io::Write;

use anyhow::{Context, Result};
use linepick_tui::Emission;
use serde::Serialize;

use super::OutputFormat;

/// One accepted line in JSON form.
#[derive(Debug, Serialize)]
struct JsonEmission<'a> {
	text: &'a str,
	kept_open: bool,
}

/// Writes accepted lines as they arrive and flushes after each one.
pub(crate) struct OutputSink<W: Write> {
	format: OutputFormat,
	writer: W,
	emitted: usize,
}

impl<W: Write> OutputSink<W> {
	pub(crate) fn new(format: OutputFormat, writer: W) -> Self {
		Self {
			format,
			writer,
			emitted: 0,
		}
	}

	pub(crate) fn emit(&mut self, emission: &Emission) -> Result<()> {
		match self.format {
			OutputFormat::Plain => writeln!(self.writer, "{}", emission.text),
			OutputFormat::Json => {
				let line = serde_json::to_string(&JsonEmission {
					text: &emission.text,
					kept_open: emission.keep_open,
				})?;
				writeln!(self.writer, "{line}")
			}
		}
		.context("failed to write selection")?;
		self.writer.flush().context("failed to flush output")?;
		self.emitted += 1;
		Ok(())
	}

	/// Lines written so far.
	pub(crate) fn emitted(&self) -> usize {
		self.emitted
	}

	#[cfg(test)]
	pub(crate) fn into_inner(self) -> W {
		self.writer
	}
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn emission(text: &str, keep_open: bool) -> Emission {
		Emission {
			text: text.into(),
			keep_open,
		}
	}

	#[test]
	fn plain_format_writes_one_line_per_emission() {
		let mut sink = OutputSink::new(OutputFormat::Plain, Vec::new());
		sink.emit(&emission("alpha", true)).expect("emit");
		sink.emit(&emission("beta gamma", false)).expect("emit");
		assert_eq!(sink.emitted(), 2);
		assert_eq!(sink.into_inner(), b"alpha\nbeta gamma\n");
	}

	#[test]
	fn json_format_records_whether_the_picker_stayed_open() {
		let mut sink = OutputSink::new(OutputFormat::Json, Vec::new());
		sink.emit(&emission("a \"quoted\" line", true)).expect("emit");
		let output = String::from_utf8(sink.into_inner()).expect("utf8");

		let value: Value = serde_json::from_str(output.trim_end()).expect("parse");
		assert_eq!(value["text"], "a \"quoted\" line");
		assert_eq!(value["kept_open"], true);
		assert!(output.ends_with('\n'));
	}
}
