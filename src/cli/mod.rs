//! Command-line interface for vulcan.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap's derive macros
//! - [`dispatcher`] - Turns a parsed [`Cli`] into one generator run

pub mod args;
pub mod dispatcher;

pub use args::{Cli, ACTIONS_HELP};
pub use dispatcher::{CommandDispatcher, CommandResult, USAGE_EXIT_CODE};
