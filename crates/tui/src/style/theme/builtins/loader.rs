use anyhow::{Context, Result, anyhow, bail};
use include_dir::{Dir, File};
use ratatui::style::{Modifier, Style};
use serde::Deserialize;

use crate::style::theme::color::{normalise_key, parse_color};
use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_document(self, context: &str) -> Result<ThemeDocument> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;

		let registration = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.fold(ThemeRegistration::new(self.name, theme), |registration, alias| {
				registration.alias(alias)
			});

		Ok(ThemeDocument {
			registration,
			is_default: self.default,
		})
	}
}

#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	normal: StyleConfig,
	selected: StyleConfig,
	output: StyleConfig,
	#[serde(default)]
	prompt: Option<StyleConfig>,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		let selected = self.selected.to_style(&format!("{context}.selected"))?;
		let prompt = match &self.prompt {
			Some(prompt) => prompt.to_style(&format!("{context}.prompt"))?,
			None => selected,
		};
		Ok(Theme {
			normal: self.normal.to_style(&format!("{context}.normal"))?,
			selected,
			output: self.output.to_style(&format!("{context}.output"))?,
			prompt,
		})
	}
}

struct ThemeDocument {
	registration: ThemeRegistration,
	is_default: bool,
}

#[derive(Debug, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg).with_context(|| format!("{context}: foreground"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg).with_context(|| format!("{context}: background"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let modifier_value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier_value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut registrations = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let document = parse_theme_document(file)?;
		let theme = document.registration.theme;

		if document.is_default {
			if let Some((_, existing_name)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing_name}` and `{}`)",
					document.registration.name
				);
			}

			default_theme = Some((theme, document.registration.name.clone()));
		}

		registrations.push(document.registration);
	}

	let default_theme = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.ok_or_else(|| anyhow!("no built-in theme definitions were found"))?;

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_document(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("{path:?} is not valid UTF-8"))?;

	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme definition in {path:?}"))?;

	config.into_document(&format!("{path:?}"))
}

fn parse_modifier(input: &str) -> Result<Modifier> {
	match normalise_key(input).as_ref() {
		"bold" => Ok(Modifier::BOLD),
		"dim" => Ok(Modifier::DIM),
		"italic" => Ok(Modifier::ITALIC),
		"underline" | "underlined" => Ok(Modifier::UNDERLINED),
		"reversed" | "reverse" | "invert" | "inverted" => Ok(Modifier::REVERSED),
		"crossed_out" | "crossedout" | "strikethrough" => Ok(Modifier::CROSSED_OUT),
		other => bail!("unknown modifier `{other}`"),
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;

	#[test]
	fn missing_prompt_falls_back_to_selected() {
		let config: ThemeConfig = toml::from_str(
			r##"
			name = "plain"
			[styles.normal]
			fg = "white"
			[styles.selected]
			bg = "#005577"
			[styles.output]
			bg = "cyan"
			"##,
		)
		.unwrap();
		let document = config.into_document("plain").unwrap();
		let theme = document.registration.theme;
		assert_eq!(theme.prompt, theme.selected);
		assert_eq!(theme.selected.bg, Some(Color::Rgb(0x00, 0x55, 0x77)));
		assert!(!document.is_default);
	}

	#[test]
	fn bad_colours_report_their_location() {
		let config: ThemeConfig = toml::from_str(
			r#"
			name = "broken"
			[styles.normal]
			fg = "nope"
			[styles.selected]
			[styles.output]
			"#,
		)
		.unwrap();
		let err = config.into_document("broken").err().unwrap();
		assert!(format!("{err:#}").contains("broken.styles.normal"));
	}
}
