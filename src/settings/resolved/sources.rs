use std::env;
use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl SettingSource {
	/// Origin of a value that is known to be set.
	///
	/// CLI flags win over the environment, which wins over files.
	pub(crate) fn detect(
		cli_flag: Option<&'static str>,
		env_var: &'static str,
		key: &'static str,
	) -> Self {
		if let Some(flag) = cli_flag {
			return Self::CliFlag(flag);
		}
		if env::var_os(env_var).is_some() {
			return Self::Environment(env_var);
		}
		Self::ConfigKey(key)
	}
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) query_capacity: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_query_capacity(&self) -> SettingSource {
		self.query_capacity
			.clone()
			.unwrap_or(SettingSource::ConfigKey("input.query_capacity"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cli_flags_take_precedence() {
		let source = SettingSource::detect(Some("--theme"), "LINEPICK__UI__THEME", "ui.theme");
		assert_eq!(source, SettingSource::CliFlag("--theme"));
		assert_eq!(source.to_string(), "CLI flag `--theme`");
	}

	#[test]
	fn unset_environment_falls_back_to_the_key() {
		let source = SettingSource::detect(None, "LINEPICK__TEST__NEVER_SET", "test.never_set");
		assert_eq!(source, SettingSource::ConfigKey("test.never_set"));
	}
}
