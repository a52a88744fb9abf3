//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The command tree is an explicit
//! clap-derived structure built at startup; there is no global registry.

pub mod completions;
pub mod dispatcher;
pub mod index;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
