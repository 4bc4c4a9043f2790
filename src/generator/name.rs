//! Symbolic generator names.

use std::fmt;
use std::str::FromStr;

/// Name under which a generator is registered and invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandlerName {
    Package,
    App,
    Module,
    Component,
    Route,
    Remove,
    List,
    Unshallow,
}

impl HandlerName {
    pub const ALL: [HandlerName; 8] = [
        HandlerName::Package,
        HandlerName::App,
        HandlerName::Module,
        HandlerName::Component,
        HandlerName::Route,
        HandlerName::Remove,
        HandlerName::List,
        HandlerName::Unshallow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::App => "app",
            Self::Module => "module",
            Self::Component => "component",
            Self::Route => "route",
            Self::Remove => "remove",
            Self::List => "list",
            Self::Unshallow => "unshallow",
        }
    }
}

impl FromStr for HandlerName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown generator: {}", s))
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
