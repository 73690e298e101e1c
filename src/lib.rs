//! Support code shared by the `linepick` binary.
//!
//! The matching engine lives in [`linepick_core`] and the terminal overlay in
//! [`linepick_tui`]; both are re-exported here so embedders can depend on
//! this crate alone.

pub mod app_dirs;
pub mod logging;

pub use linepick_core::{
	Command, Completion, ItemStore, MatchOptions, Outcome, Session, SessionOptions,
};
pub use linepick_tui::{Emission, KeyBindings, Picker, Placement, Theme, run};
