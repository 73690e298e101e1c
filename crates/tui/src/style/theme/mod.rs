mod builtins;
mod color;
mod registry;
mod types;

pub use builtins::default_theme;
pub use color::{ColorOverrides, parse_color};
pub use registry::{by_name, descriptors, names, resolve};
pub use types::{Theme, ThemeDescriptor, ThemeError, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
