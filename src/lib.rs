//! Vulcan - Command-line dispatcher for VulcanJS code generators.
//!
//! Vulcan turns a short command such as `vulcan generate package blog`
//! into one generator invocation: it classifies the action, builds the
//! generator's parameters, merges them with the user's flags and runs
//! the generator.
//!
//! # Modules
//!
//! - [`action`] - Action vocabulary and positional-token resolution
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`dispatch`] - Routing table and the dispatch flow
//! - [`error`] - Error types and result aliases
//! - [`generator`] - Generator traits, registry, runtime and locator
//! - [`options`] - Flag tokenizer and the parameter bag
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use vulcan::action::ParsedAction;
//! use vulcan::dispatch::route;
//! use vulcan::generator::HandlerName;
//!
//! let action = ParsedAction::resolve(&["generate", "module", "blog", "posts"]).unwrap();
//! let params = route(&action).unwrap();
//! assert_eq!(params.handler(), HandlerName::Module);
//! ```

pub mod action;
pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod options;
pub mod ui;

pub use error::{Result, VulcanError};
