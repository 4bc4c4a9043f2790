//! Action verbs and component kinds.

use std::fmt;
use std::str::FromStr;

/// The verb of a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Generate,
    Remove,
    Create,
    List,
    Unshallow,
}

impl ActionType {
    /// All recognized verbs, in usage order.
    pub const ALL: [ActionType; 5] = [
        ActionType::Generate,
        ActionType::Create,
        ActionType::Remove,
        ActionType::List,
        ActionType::Unshallow,
    ];

    /// The verb as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Remove => "remove",
            Self::Create => "create",
            Self::List => "list",
            Self::Unshallow => "unshallow",
        }
    }
}

impl FromStr for ActionType {
    type Err = String;

    /// Verbs are matched case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generate" => Ok(Self::Generate),
            "remove" => Ok(Self::Remove),
            "create" => Ok(Self::Create),
            "list" => Ok(Self::List),
            "unshallow" => Ok(Self::Unshallow),
            _ => Err(format!("unknown action: {}", s)),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of VulcanJS artifact an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Package,
    Module,
    Component,
    Route,
    App,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Module => "module",
            Self::Component => "component",
            Self::Route => "route",
            Self::App => "app",
        }
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "package" => Ok(Self::Package),
            "module" => Ok(Self::Module),
            "component" => Ok(Self::Component),
            "route" => Ok(Self::Route),
            "app" => Ok(Self::App),
            _ => Err(format!("unknown component kind: {}", s)),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
