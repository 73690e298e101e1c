//! Configuration loading and resolution.
//!
//! Default files, explicit `--config` files and `LINEPICK__*` environment
//! variables are layered with the `config` crate, command line flags are
//! applied on top, and the result is validated into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
