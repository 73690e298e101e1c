use linepick_tui::style::{self, Color};
use linepick_tui::Theme;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Smallest query capacity that still leaves room for one byte of text.
const MIN_QUERY_CAPACITY: usize = 2;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let capacity = config.session.query_capacity;
	if capacity < MIN_QUERY_CAPACITY {
		return Err(ConfigError::invalid(
			"input.query_capacity",
			capacity.to_string(),
			sources.source_for_query_capacity(),
			format!("must be at least {MIN_QUERY_CAPACITY}"),
		));
	}

	Ok(())
}

/// Look up a theme by name; `None` selects the default theme.
pub(crate) fn resolve_theme(
	name: Option<&str>,
	origin: impl FnOnce() -> SettingSource,
) -> Result<Theme, ConfigError> {
	style::resolve(name).map_err(|err| {
		ConfigError::invalid("ui.theme", name.unwrap_or_default(), origin(), err.to_string())
	})
}

pub(crate) fn resolve_color(
	key: &'static str,
	value: &str,
	origin: SettingSource,
) -> Result<Color, ConfigError> {
	style::parse_color(value).map_err(|err| ConfigError::invalid(key, value, origin, err.to_string()))
}
