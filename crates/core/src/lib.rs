//! Matching, ranking and paging engine for `linepick`.
//!
//! The crate owns everything that happens between a keystroke and the next
//! redraw: the [`ItemStore`] loaded once at startup, the tiered [`Matcher`]
//! that rebuilds the [`MatchList`] on every query change, the [`Pager`] that
//! splits matches into pages, the completion helper, and the [`Session`]
//! state machine that ties them together. Rendering and key decoding live in
//! `linepick-tui`.

pub mod command;
pub mod compare;
pub mod completion;
mod error;
pub mod items;
pub mod matcher;
pub mod pagination;
pub mod query;
pub mod session;

pub use command::{Command, CursorMove, Outcome, SelectionMove};
pub use compare::CaseSensitivity;
pub use completion::{Completion, common_prefix};
pub use error::EditError;
pub use items::{DEFAULT_QUERY_CAPACITY, Item, ItemStore};
pub use matcher::{MatchList, MatchOptions, Matcher, Tier, tokenize};
pub use pagination::{CellMeasure, ITEM_PADDING, Measure, Pager, Viewport, Window};
pub use query::QueryBuffer;
pub use session::{Session, SessionOptions};
