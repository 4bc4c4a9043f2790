//! Routing actions to generators.
//!
//! | action      | kind       | generator   | options from positionals                          |
//! |-------------|------------|-------------|---------------------------------------------------|
//! | `generate`  | package    | `package`   | packageName                                       |
//! | `generate`  | module     | `module`    | packageName, moduleName                           |
//! | `generate`  | component  | `component` | packageName, componentName                        |
//! | `generate`  | route      | `route`     | packageName, routeName, routePath, componentName, layoutName |
//! | `remove`    | package    | `remove`    | vulcanjsComponent, packageName                    |
//! | `remove`    | module     | `remove`    | vulcanjsComponent, packageName, moduleName        |
//! | `remove`    | route      | `remove`    | vulcanjsComponent, packageName, routeName         |
//! | `remove`    | other/none | `remove`    | (none)                                            |
//! | `create`    |            | `app`       | appName                                           |
//! | `list`      | any        | `list`      | vulcanjsComponent, packageName                    |
//! | `unshallow` | any        | `unshallow` | vulcanjsComponent                                 |

use tracing::{debug, info};

use crate::action::{ActionType, ComponentKind, ParsedAction};
use crate::error::{Result, VulcanError};
use crate::generator::{GeneratorOutcome, GeneratorRuntime, GeneratorSource};
use crate::options::{merge_options, ParameterBag};

use super::params::{
    AppParams, ComponentParams, HandlerParams, ListParams, ModuleParams, PackageParams,
    RemoveTarget, RouteParams, UnshallowParams,
};

/// Map an action to the generator and parameters it runs with.
///
/// Pure: nothing is registered or run.
///
/// # Errors
///
/// `generate` without a kind it can build is [`VulcanError::UnrecognizedAction`].
pub fn route(action: &ParsedAction) -> Result<HandlerParams> {
    let kind = action
        .component
        .as_deref()
        .and_then(|c| c.parse::<ComponentKind>().ok());

    let params = match (action.action_type, kind) {
        (ActionType::Generate, Some(ComponentKind::Package)) => {
            HandlerParams::Package(PackageParams {
                package_name: action.arg(0),
            })
        }
        (ActionType::Generate, Some(ComponentKind::Module)) => HandlerParams::Module(ModuleParams {
            package_name: action.arg(0),
            module_name: action.arg(1),
        }),
        (ActionType::Generate, Some(ComponentKind::Component)) => {
            HandlerParams::Component(ComponentParams {
                package_name: action.arg(0),
                component_name: action.arg(1),
            })
        }
        (ActionType::Generate, Some(ComponentKind::Route)) => HandlerParams::Route(RouteParams {
            package_name: action.arg(0),
            route_name: action.arg(1),
            route_path: action.arg(2),
            component_name: action.arg(3),
            layout_name: action.arg(4),
        }),
        (ActionType::Generate, Some(ComponentKind::App) | None) => {
            return Err(VulcanError::UnrecognizedAction {
                input: action.to_string(),
            });
        }
        (ActionType::Remove, Some(ComponentKind::Package)) => {
            HandlerParams::Remove(Some(RemoveTarget::Package {
                package_name: action.arg(0),
            }))
        }
        (ActionType::Remove, Some(ComponentKind::Module)) => {
            HandlerParams::Remove(Some(RemoveTarget::Module {
                package_name: action.arg(0),
                module_name: action.arg(1),
            }))
        }
        (ActionType::Remove, Some(ComponentKind::Route)) => {
            HandlerParams::Remove(Some(RemoveTarget::Route {
                package_name: action.arg(0),
                route_name: action.arg(1),
            }))
        }
        (ActionType::Remove, Some(ComponentKind::Component | ComponentKind::App) | None) => {
            HandlerParams::Remove(None)
        }
        (ActionType::Create, _) => HandlerParams::App(AppParams {
            app_name: action.arg(0),
        }),
        (ActionType::List, _) => HandlerParams::List(ListParams {
            component: action.component.clone(),
            package_name: action.arg(0),
        }),
        (ActionType::Unshallow, _) => HandlerParams::Unshallow(UnshallowParams {
            component: action.component.clone(),
        }),
    };

    Ok(params)
}

/// Registers and runs the generator for an action.
///
/// Each dispatch registers exactly one generator and runs it once,
/// registration first.
pub struct Dispatcher<S, R> {
    source: S,
    runtime: R,
}

impl<S: GeneratorSource, R: GeneratorRuntime> Dispatcher<S, R> {
    /// Create a dispatcher resolving generators from `source` into `runtime`.
    pub fn new(source: S, runtime: R) -> Self {
        Self { source, runtime }
    }

    /// Get the runtime.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Consume the dispatcher, returning the runtime.
    pub fn into_runtime(self) -> R {
        self.runtime
    }

    /// Dispatch an action with the flags parsed from the command line.
    ///
    /// The generator's outcome is returned unchanged.
    pub fn dispatch(
        &mut self,
        action: &ParsedAction,
        flags: &ParameterBag,
    ) -> Result<GeneratorOutcome> {
        let params = route(action)?;
        let handler = params.handler();

        let generator = self.source.resolve(handler)?;
        self.runtime.register(generator, handler);

        let options = merge_options(flags, &params.extra_options()?);
        debug!(generator = %handler, ?options, "dispatching");
        info!(generator = %handler, "running generator");

        self.runtime.run(handler, &options)
    }
}

/// The merged options a dispatch would pass, without running anything.
pub fn plan_options(params: &HandlerParams, flags: &ParameterBag) -> Result<ParameterBag> {
    Ok(merge_options(flags, &params.extra_options()?))
}
