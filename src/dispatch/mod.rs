//! The dispatch table.
//!
//! Decides which generator an action runs and which options its
//! positional arguments become, then registers and runs that generator.
//!
//! # Example
//!
//! ```
//! use vulcan::action::ParsedAction;
//! use vulcan::dispatch::{route, HandlerParams};
//! use vulcan::generator::HandlerName;
//!
//! let action = ParsedAction::resolve(&["remove", "module", "blog", "comments"]).unwrap();
//! let params = route(&action).unwrap();
//! assert_eq!(params.handler(), HandlerName::Remove);
//!
//! let options = params.extra_options().unwrap();
//! assert_eq!(options.get("vulcanjsComponent"), Some("module"));
//! assert_eq!(options.get("moduleName"), Some("comments"));
//! ```

pub mod params;
pub mod table;

pub use params::{
    AppParams, ComponentParams, HandlerParams, ListParams, ModuleParams, PackageParams,
    RemoveTarget, RouteParams, UnshallowParams,
};
pub use table::{plan_options, route, Dispatcher};
