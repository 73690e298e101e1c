//! File logging for the binary.
//!
//! The overlay owns the terminal, so diagnostics go to
//! `<cache dir>/linepick.log` and only when `LINEPICK_LOG` holds a filter
//! directive such as `debug` or `linepick_core=trace`.

use std::env;
use std::fs;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LINEPICK_LOG";

const LOG_FILE: &str = "linepick.log";

/// Install the file subscriber if `LINEPICK_LOG` is set.
///
/// Keep the returned guard alive until exit; dropping it flushes the writer.
pub fn initialize() -> Result<Option<WorkerGuard>> {
	let Some(directives) = env::var(LOG_ENV)
		.ok()
		.filter(|value| !value.trim().is_empty())
	else {
		return Ok(None);
	};

	let filter = EnvFilter::try_new(&directives)
		.with_context(|| format!("invalid {LOG_ENV} filter {directives:?}"))?;
	let dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;

	let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
	let (writer, guard) = tracing_appender::non_blocking(appender);
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(writer)
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install logger: {err}"))?;

	Ok(Some(guard))
}
