//! Classifying a command line into a [`ParsedAction`].
//!
//! The resolver only looks at positional tokens; flags are stripped by
//! [`parse_args`] first and reach the generator through the parameter bag.
//!
//! # Grammar
//!
//! ```text
//! generate <kind> [args...]
//! remove [<kind> [args...]]
//! create <appName>
//! list <kind> [<packageName>]
//! unshallow <kind>
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{Result, VulcanError};
use crate::options::parse_args;

use super::kind::ActionType;

/// A command line classified by verb, target kind and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAction {
    /// The verb.
    pub action_type: ActionType,
    /// The target kind as typed, if the verb takes one and it was given.
    pub component: Option<String>,
    /// Remaining positional tokens, in order.
    pub args: Vec<String>,
}

impl ParsedAction {
    /// Resolve raw command-line tokens (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`VulcanError::UnrecognizedAction`] when the first positional
    /// token is not a known verb, or when there is none.
    pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let positionals = parse_args(tokens).positionals;
        Self::from_positionals(&positionals)
    }

    /// Classify tokens that are already known to be positional.
    pub fn from_positionals(positionals: &[String]) -> Result<Self> {
        let Some((verb, rest)) = positionals.split_first() else {
            return Err(VulcanError::UnrecognizedAction {
                input: String::new(),
            });
        };

        let action_type: ActionType =
            verb.parse().map_err(|_| VulcanError::UnrecognizedAction {
                input: positionals.join(" "),
            })?;

        let action = match action_type {
            ActionType::Create => Self {
                action_type,
                component: None,
                args: rest.to_vec(),
            },
            ActionType::Generate
            | ActionType::Remove
            | ActionType::List
            | ActionType::Unshallow => {
                let (component, args) = match rest.split_first() {
                    Some((component, args)) => (Some(component.clone()), args.to_vec()),
                    None => (None, Vec::new()),
                };
                Self {
                    action_type,
                    component,
                    args,
                }
            }
        };

        debug!(
            action = %action.action_type,
            component = ?action.component,
            args = ?action.args,
            "resolved action"
        );

        Ok(action)
    }

    /// Positional argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<String> {
        self.args.get(index).cloned()
    }
}

impl fmt::Display for ParsedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_type.as_str())?;
        for token in self.component.iter().chain(&self.args) {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
