//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`escompat check`, `escompat targets`)
//! - Shared project loading in [`context`]
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod features;
pub mod schema;
pub mod targets;

#[cfg(test)]
pub(crate) mod fixtures;

pub use context::ProjectContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
