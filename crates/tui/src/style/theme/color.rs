use ratatui::style::{Color, Style};

use super::types::{Theme, ThemeError};

/// Foreground and background replacements applied on top of a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorOverrides {
	pub normal_bg: Option<Color>,
	pub normal_fg: Option<Color>,
	pub selected_bg: Option<Color>,
	pub selected_fg: Option<Color>,
	pub output_bg: Option<Color>,
	pub output_fg: Option<Color>,
}

impl ColorOverrides {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}

	/// `theme` with every set colour replaced. The prompt follows the
	/// selected colours, as it is drawn in the selected scheme.
	#[must_use]
	pub fn apply(&self, theme: Theme) -> Theme {
		Theme {
			normal: recolour(theme.normal, self.normal_fg, self.normal_bg),
			selected: recolour(theme.selected, self.selected_fg, self.selected_bg),
			output: recolour(theme.output, self.output_fg, self.output_bg),
			prompt: recolour(theme.prompt, self.selected_fg, self.selected_bg),
		}
	}
}

fn recolour(style: Style, fg: Option<Color>, bg: Option<Color>) -> Style {
	let style = match fg {
		Some(fg) => style.fg(fg),
		None => style,
	};
	match bg {
		Some(bg) => style.bg(bg),
		None => style,
	}
}

/// Parse a colour written as `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `ansi(n)`,
/// a bare palette index, or a colour name such as `light_blue`.
pub fn parse_color(input: &str) -> Result<Color, ThemeError> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_colour(input, hex);
	}

	if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
		return parse_rgb_triplet(input, body);
	}

	if let Some(body) = value
		.strip_prefix("ansi(")
		.and_then(|s| s.strip_suffix(')'))
	{
		return body
			.trim()
			.parse::<u8>()
			.map(Color::Indexed)
			.map_err(|_| ThemeError::invalid_color(input, "ANSI index must be 0-255"));
	}

	if let Ok(index) = value.parse::<u8>() {
		return Ok(Color::Indexed(index));
	}

	match normalise_key(value).as_ref() {
		"reset" | "none" | "default" => Ok(Color::Reset),
		"black" => Ok(Color::Black),
		"red" => Ok(Color::Red),
		"green" => Ok(Color::Green),
		"yellow" => Ok(Color::Yellow),
		"blue" => Ok(Color::Blue),
		"magenta" => Ok(Color::Magenta),
		"cyan" => Ok(Color::Cyan),
		"gray" | "grey" => Ok(Color::Gray),
		"dark_gray" | "dark_grey" => Ok(Color::DarkGray),
		"light_red" => Ok(Color::LightRed),
		"light_green" => Ok(Color::LightGreen),
		"light_yellow" => Ok(Color::LightYellow),
		"light_blue" => Ok(Color::LightBlue),
		"light_magenta" => Ok(Color::LightMagenta),
		"light_cyan" => Ok(Color::LightCyan),
		"white" => Ok(Color::White),
		_ => Err(ThemeError::invalid_color(input, "unknown colour name")),
	}
}

fn parse_hex_colour(input: &str, hex: &str) -> Result<Color, ThemeError> {
	if !hex.is_ascii() {
		return Err(ThemeError::invalid_color(input, "hex colours must be ASCII"));
	}
	let expanded: String = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect(),
		6 => hex.to_string(),
		_ => {
			return Err(ThemeError::invalid_color(
				input,
				"hex colours must be 3 or 6 characters long",
			));
		}
	};

	let component = |range: std::ops::Range<usize>| {
		u8::from_str_radix(&expanded[range], 16)
			.map_err(|_| ThemeError::invalid_color(input, "invalid hex digit"))
	};

	Ok(Color::Rgb(component(0..2)?, component(2..4)?, component(4..6)?))
}

fn parse_rgb_triplet(input: &str, body: &str) -> Result<Color, ThemeError> {
	let components = body.split(',').map(str::trim).collect::<Vec<_>>();

	let [r, g, b] = components.as_slice() else {
		return Err(ThemeError::invalid_color(
			input,
			format!(
				"expected three components for rgb() colour, found {}",
				components.len()
			),
		));
	};

	let parse = |value: &str, component: char| {
		value.parse::<u8>().map_err(|_| {
			ThemeError::invalid_color(input, format!("invalid {component}-component `{value}`"))
		})
	};

	Ok(Color::Rgb(parse(*r, 'r')?, parse(*g, 'g')?, parse(*b, 'b')?))
}

pub(super) fn normalise_key(value: &str) -> String {
	value
		.trim()
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}
