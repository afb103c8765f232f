//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads the
//! project config once and routes CLI subcommands to their implementations.
//! Commands that classify the environment read their inputs from a
//! [`ProbeContext`], so tests can substitute variables and files.

pub mod check;
pub mod completions;
pub mod context;
pub mod detect;
pub mod dispatcher;
pub mod report;

pub use context::ProbeContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
