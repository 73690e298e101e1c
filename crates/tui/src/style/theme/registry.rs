use super::builtins;
use super::types::{Theme, ThemeDescriptor, ThemeError};

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	builtins::registrations()
		.into_iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of the built-in themes, without aliases.
#[must_use]
pub fn names() -> Vec<String> {
	builtins::registrations()
		.into_iter()
		.map(|registration| registration.name)
		.collect()
}

/// Every built-in theme with its aliases.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
	builtins::registrations()
		.into_iter()
		.map(|registration| ThemeDescriptor {
			name: registration.name,
			aliases: registration.aliases,
			theme: registration.theme,
		})
		.collect()
}

/// The named theme, or the default one when no name is given.
pub fn resolve(name: Option<&str>) -> Result<Theme, ThemeError> {
	let Some(name) = name else {
		return Ok(builtins::default_theme());
	};
	by_name(name).ok_or_else(|| ThemeError::UnknownTheme {
		name: name.to_string(),
		available: names().join(", "),
	})
}
