use std::fmt::Write;

use clap::Arg;
use clap::builder::StyledStr;
use clap::builder::styling::{AnsiColor, Color, Style};

fn muted() -> Style {
	Style::new()
		.fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)))
		.dimmed()
}

/// Move clap's trailing help annotations into one muted suffix.
pub(super) fn dim_annotations(mut arg: Arg) -> Arg {
	let help = arg.get_help().map(ToString::to_string).unwrap_or_default();
	let mut notes = Vec::new();

	if let Some(values) = possible_values(&arg) {
		arg = arg.hide_possible_values(true);
		notes.push(values);
	}
	if !help.contains("(default:")
		&& let Some(defaults) = default_values(&arg)
	{
		arg = arg.hide_default_value(true);
		notes.push(defaults);
	}
	if let Some(env) = arg.get_env().map(|name| name.to_string_lossy().into_owned()) {
		arg = arg.hide_env(true);
		notes.push(format!("[env: {env}=]"));
	}

	if help.is_empty() && notes.is_empty() {
		return arg;
	}

	let style = muted();
	let mut styled = StyledStr::new();
	let (text, inline_default) = match help.find("(default:") {
		Some(start) => help.split_at(start),
		None => (help.as_str(), ""),
	};
	styled.push_str(text);
	if !inline_default.is_empty() {
		let _ = write!(styled, "{style}{inline_default}{style:#}");
	}
	let mut separate = !help.is_empty();
	for note in notes {
		if separate {
			styled.push_str(" ");
		}
		let _ = write!(styled, "{style}{note}{style:#}");
		separate = true;
	}
	arg.help(styled)
}

fn possible_values(arg: &Arg) -> Option<String> {
	if !arg.get_action().takes_values() {
		return None;
	}
	let names: Vec<String> = arg
		.get_possible_values()
		.iter()
		.filter(|value| !value.is_hide_set())
		.map(|value| value.get_name().to_owned())
		.collect();
	(!names.is_empty()).then(|| format!("[possible values: {}]", names.join(", ")))
}

fn default_values(arg: &Arg) -> Option<String> {
	let values: Vec<String> = arg
		.get_default_values()
		.iter()
		.map(|value| value.to_string_lossy().into_owned())
		.filter(|value| !value.trim().is_empty())
		.collect();
	(!values.is_empty()).then(|| format!("(default: {})", values.join(", ")))
}
