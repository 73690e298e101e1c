use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use linepick_core::{ItemStore, Outcome};
use linepick_tui::{KeyBindings, Picker};
use tracing::info;

use crate::cli::OutputSink;
use crate::settings::ResolvedConfig;

/// Reads the items and runs the overlay over them.
pub(crate) struct PickWorkflow {
	picker: Picker,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let store = read_items(config.input.as_deref(), config.session.query_capacity)?;
		info!(items = store.len(), "items loaded");
		Ok(Self {
			picker: build_picker(store, config),
		})
	}

	/// Run until the user accepts or cancels, writing each accepted line to
	/// `sink` as it happens.
	pub(crate) fn run<W: Write>(self, sink: &mut OutputSink<W>) -> Result<Outcome> {
		self.picker.run(|emission| sink.emit(&emission))
	}
}

/// Translate resolved configuration into a configured [`Picker`].
fn build_picker(store: ItemStore, config: ResolvedConfig) -> Picker {
	let ResolvedConfig {
		input: _,
		session,
		delete_cancels,
		initial_query,
		prompt,
		placement,
		theme_name: _,
		theme,
		colors,
	} = config;

	let mut picker = Picker::new(store)
		.with_options(session)
		.with_initial_query(initial_query)
		.with_theme(theme)
		.with_color_overrides(colors)
		.with_placement(placement)
		.with_key_bindings(KeyBindings::new(delete_cancels));
	if let Some(prompt) = prompt {
		picker = picker.with_prompt(prompt);
	}
	picker
}

/// Load every line before the overlay takes the terminal.
fn read_items(path: Option<&Path>, capacity: usize) -> Result<ItemStore> {
	match path {
		Some(path) => {
			let file = File::open(path)
				.with_context(|| format!("failed to open {}", path.display()))?;
			ItemStore::read_from(BufReader::new(file), capacity)
				.with_context(|| format!("failed to read items from {}", path.display()))
		}
		None => ItemStore::read_from(io::stdin().lock(), capacity)
			.context("failed to read items from stdin"),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use linepick_core::DEFAULT_QUERY_CAPACITY;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn items_are_read_from_a_file() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("items.txt");
		fs::write(&path, "alpha\nbeta\n\nsecret\n").expect("write items");

		let store = read_items(Some(&path), DEFAULT_QUERY_CAPACITY).expect("read");
		assert_eq!(store.len(), 3);
		assert!(store.get(2).is_some_and(|item| item.is_hidden()));
	}

	#[test]
	fn missing_input_file_is_reported() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("absent.txt");
		let message = read_items(Some(&path), DEFAULT_QUERY_CAPACITY)
			.expect_err("missing")
			.to_string();
		assert!(message.contains("absent.txt"), "{message}");
	}
}
