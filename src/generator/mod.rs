//! Generators and the runtime that invokes them.
//!
//! Generators do the actual scaffolding. vulcan treats them as opaque:
//! each receives the name it was registered under and a
//! [`ParameterBag`], and reports a [`GeneratorOutcome`].
//!
//! # Architecture
//!
//! - [`name`] - The closed set of [`HandlerName`]s
//! - [`registry`] - [`GeneratorRegistry`], name to generator
//! - [`runtime`] - [`GeneratorRuntime`] and its default [`GeneratorEnv`]
//! - [`command`] - [`CommandGenerator`], a generator backed by a program
//! - [`locator`] - [`GeneratorLocator`], finds the program for a name

pub mod command;
pub mod locator;
pub mod name;
pub mod registry;
pub mod runtime;

use std::sync::Arc;

use crate::error::Result;
use crate::options::ParameterBag;

pub use command::CommandGenerator;
pub use locator::GeneratorLocator;
pub use name::HandlerName;
pub use registry::GeneratorRegistry;
pub use runtime::{GeneratorEnv, GeneratorRuntime};

/// A code generator.
pub trait Generator {
    /// Run the generator.
    ///
    /// # Arguments
    ///
    /// * `name` - The name the generator was registered under
    /// * `options` - The merged parameter bag
    ///
    /// # Returns
    ///
    /// The outcome of the run. A generator that ran and failed returns
    /// `Ok` with a failed outcome; `Err` means it could not run at all.
    fn run(&self, name: HandlerName, options: &ParameterBag) -> Result<GeneratorOutcome>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// Produces the generator for a name.
pub trait GeneratorSource {
    /// Resolve the generator to register under `name`.
    fn resolve(&self, name: HandlerName) -> Result<Arc<dyn Generator>>;
}

impl<F> GeneratorSource for F
where
    F: Fn(HandlerName) -> Result<Arc<dyn Generator>>,
{
    fn resolve(&self, name: HandlerName) -> Result<Arc<dyn Generator>> {
        self(name)
    }
}

/// Completion signal of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOutcome {
    /// Whether the generator reported success.
    pub success: bool,

    /// Exit code reported by the generator (None if killed by a signal).
    pub exit_code: Option<i32>,
}

impl GeneratorOutcome {
    /// Create a successful outcome.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
        }
    }

    /// Create a failed outcome.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Process exit code to report for this outcome.
    ///
    /// Failures without a code (signals) and failures that claim code 0
    /// both map to 1.
    pub fn process_exit_code(&self) -> i32 {
        match (self.success, self.exit_code) {
            (true, _) => 0,
            (false, Some(code)) if code != 0 => code,
            (false, _) => 1,
        }
    }
}
