//! Terminal overlay for `linepick`.
//!
//! Draws a [`linepick_core::Session`] as a one-line prompt with either a
//! vertical list or a single-line flow of matches, translates key events into
//! session commands, and runs the event loop on the terminal.

mod app;
mod builder;
pub mod keymap;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, Placement};
pub use builder::Picker;
pub use keymap::KeyBindings;
pub use runtime::{Emission, run};
pub use style::{ColorOverrides, StyleConfig, Theme, ThemeError, builtin_themes, default_theme};
