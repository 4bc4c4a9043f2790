//! Typed parameters for each generator.
//!
//! Every field is optional: a positional argument the user left out stays
//! `None` and reaches the generator as an absent value. Serialization gives
//! the option names generators read (`packageName`, `vulcanjsComponent`, ...).

use serde::Serialize;

use crate::error::Result;
use crate::generator::HandlerName;
use crate::options::ParameterBag;

/// Parameters of `generate package`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageParams {
    pub package_name: Option<String>,
}

/// Parameters of `generate module`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleParams {
    pub package_name: Option<String>,
    pub module_name: Option<String>,
}

/// Parameters of `generate component`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentParams {
    pub package_name: Option<String>,
    pub component_name: Option<String>,
}

/// Parameters of `generate route`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    pub package_name: Option<String>,
    pub route_name: Option<String>,
    pub route_path: Option<String>,
    pub component_name: Option<String>,
    pub layout_name: Option<String>,
}

/// What a `remove` targets.
///
/// Serialized with the kind under `vulcanjsComponent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(
    tag = "vulcanjsComponent",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum RemoveTarget {
    Package {
        package_name: Option<String>,
    },
    Module {
        package_name: Option<String>,
        module_name: Option<String>,
    },
    Route {
        package_name: Option<String>,
        route_name: Option<String>,
    },
}

/// Parameters of `create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppParams {
    pub app_name: Option<String>,
}

/// Parameters of `list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    #[serde(rename = "vulcanjsComponent")]
    pub component: Option<String>,
    pub package_name: Option<String>,
}

/// Parameters of `unshallow`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnshallowParams {
    #[serde(rename = "vulcanjsComponent")]
    pub component: Option<String>,
}

/// Parameters for exactly one generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerParams {
    Package(PackageParams),
    Module(ModuleParams),
    Component(ComponentParams),
    Route(RouteParams),
    /// `None` is the bare removal flow: the generator decides what to remove.
    Remove(Option<RemoveTarget>),
    App(AppParams),
    List(ListParams),
    Unshallow(UnshallowParams),
}

impl HandlerParams {
    /// The generator these parameters are for.
    pub fn handler(&self) -> HandlerName {
        match self {
            Self::Package(_) => HandlerName::Package,
            Self::Module(_) => HandlerName::Module,
            Self::Component(_) => HandlerName::Component,
            Self::Route(_) => HandlerName::Route,
            Self::Remove(_) => HandlerName::Remove,
            Self::App(_) => HandlerName::App,
            Self::List(_) => HandlerName::List,
            Self::Unshallow(_) => HandlerName::Unshallow,
        }
    }

    /// The action-derived options, keyed by the names generators read.
    pub fn extra_options(&self) -> Result<ParameterBag> {
        let value = match self {
            Self::Package(p) => serde_json::to_value(p)?,
            Self::Module(p) => serde_json::to_value(p)?,
            Self::Component(p) => serde_json::to_value(p)?,
            Self::Route(p) => serde_json::to_value(p)?,
            Self::Remove(None) => return Ok(ParameterBag::new()),
            Self::Remove(Some(target)) => serde_json::to_value(target)?,
            Self::App(p) => serde_json::to_value(p)?,
            Self::List(p) => serde_json::to_value(p)?,
            Self::Unshallow(p) => serde_json::to_value(p)?,
        };
        Ok(ParameterBag::from_json_value(value))
    }
}
