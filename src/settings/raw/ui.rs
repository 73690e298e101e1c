use linepick_tui::ColorOverrides;
use linepick_tui::style::Color;
use serde::Deserialize;

use super::super::resolved::{ConfigError, SettingSource, resolve_color};
use crate::cli::CliArgs;

/// `[ui]`: layout and appearance of the overlay.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) lines: Option<usize>,
	pub(super) bottom: Option<bool>,
	pub(super) prompt: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) colors: ColorSection,
}

/// `[ui.colors]`: overrides layered over the theme.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ColorSection {
	pub(super) normal_bg: Option<String>,
	pub(super) normal_fg: Option<String>,
	pub(super) selected_bg: Option<String>,
	pub(super) selected_fg: Option<String>,
	pub(super) output_bg: Option<String>,
	pub(super) output_fg: Option<String>,
}

/// Names of one colour setting in every layer.
struct ColorKey {
	key: &'static str,
	env_var: &'static str,
	flag: &'static str,
}

const NORMAL_BG: ColorKey = ColorKey {
	key: "ui.colors.normal_bg",
	env_var: "LINEPICK__UI__COLORS__NORMAL_BG",
	flag: "--normal-bg",
};
const NORMAL_FG: ColorKey = ColorKey {
	key: "ui.colors.normal_fg",
	env_var: "LINEPICK__UI__COLORS__NORMAL_FG",
	flag: "--normal-fg",
};
const SELECTED_BG: ColorKey = ColorKey {
	key: "ui.colors.selected_bg",
	env_var: "LINEPICK__UI__COLORS__SELECTED_BG",
	flag: "--selected-bg",
};
const SELECTED_FG: ColorKey = ColorKey {
	key: "ui.colors.selected_fg",
	env_var: "LINEPICK__UI__COLORS__SELECTED_FG",
	flag: "--selected-fg",
};
const OUTPUT_BG: ColorKey = ColorKey {
	key: "ui.colors.output_bg",
	env_var: "LINEPICK__UI__COLORS__OUTPUT_BG",
	flag: "--output-bg",
};
const OUTPUT_FG: ColorKey = ColorKey {
	key: "ui.colors.output_fg",
	env_var: "LINEPICK__UI__COLORS__OUTPUT_FG",
	flag: "--output-fg",
};

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(lines) = cli.lines {
			self.lines = Some(lines);
		}
		if cli.bottom {
			self.bottom = Some(true);
		}
		if let Some(prompt) = cli.prompt.clone() {
			self.prompt = Some(prompt);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		self.colors.apply_cli_overrides(cli);
	}
}

impl ColorSection {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		let pairs = [
			(&mut self.normal_bg, &cli.normal_bg),
			(&mut self.normal_fg, &cli.normal_fg),
			(&mut self.selected_bg, &cli.selected_bg),
			(&mut self.selected_fg, &cli.selected_fg),
			(&mut self.output_bg, &cli.output_bg),
			(&mut self.output_fg, &cli.output_fg),
		];
		for (target, value) in pairs {
			if let Some(value) = value {
				*target = Some(value.clone());
			}
		}
	}

	/// Parse every set colour, naming the layer a bad value came from.
	pub(super) fn resolve(&self, cli: &CliArgs) -> Result<ColorOverrides, ConfigError> {
		Ok(ColorOverrides {
			normal_bg: parse(&self.normal_bg, cli.normal_bg.is_some(), &NORMAL_BG)?,
			normal_fg: parse(&self.normal_fg, cli.normal_fg.is_some(), &NORMAL_FG)?,
			selected_bg: parse(&self.selected_bg, cli.selected_bg.is_some(), &SELECTED_BG)?,
			selected_fg: parse(&self.selected_fg, cli.selected_fg.is_some(), &SELECTED_FG)?,
			output_bg: parse(&self.output_bg, cli.output_bg.is_some(), &OUTPUT_BG)?,
			output_fg: parse(&self.output_fg, cli.output_fg.is_some(), &OUTPUT_FG)?,
		})
	}
}

fn parse(
	value: &Option<String>,
	from_cli: bool,
	names: &ColorKey,
) -> Result<Option<Color>, ConfigError> {
	let Some(value) = value.as_deref().filter(|value| !value.trim().is_empty()) else {
		return Ok(None);
	};
	let origin = SettingSource::detect(from_cli.then_some(names.flag), names.env_var, names.key);
	resolve_color(names.key, value, origin).map(Some)
}
