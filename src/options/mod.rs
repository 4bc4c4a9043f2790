//! Generator options: tokenizing flags and building the parameter bag.
//!
//! - [`flags`] - Splits raw tokens into flags and positionals
//! - [`bag`] - The [`ParameterBag`] and the option merger

pub mod bag;
pub mod flags;

pub use bag::{merge_options, ParameterBag};
pub use flags::{parse_args, ParsedArgs};
