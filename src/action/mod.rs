//! Action resolution.
//!
//! Turns the command line into a [`ParsedAction`]: the verb, the kind of
//! artifact it targets and the remaining positional arguments.
//!
//! # Example
//!
//! ```
//! use vulcan::action::{ActionType, ParsedAction};
//!
//! let action = ParsedAction::resolve(&["generate", "package", "blog"]).unwrap();
//! assert_eq!(action.action_type, ActionType::Generate);
//! assert_eq!(action.component.as_deref(), Some("package"));
//! assert_eq!(action.args, vec!["blog".to_string()]);
//! ```

pub mod kind;
pub mod resolver;

pub use kind::{ActionType, ComponentKind};
pub use resolver::ParsedAction;
