//! Core application state and behavior for the overlay.
//!
//! The [`App`] type wraps a [`linepick_core::Session`] together with the key
//! table and styling. Supporting modules split the implementation into input
//! handling and rendering.

mod actions;
mod render;
mod state;

pub use state::{App, Placement};
