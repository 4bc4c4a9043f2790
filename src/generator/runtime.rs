//! The environment generators are registered in and run from.

use std::sync::Arc;

use tracing::debug;

use crate::error::{Result, VulcanError};
use crate::options::ParameterBag;

use super::{Generator, GeneratorOutcome, GeneratorRegistry, HandlerName};

/// Runtime the dispatcher hands generators to.
///
/// A generator must be registered before it is run.
pub trait GeneratorRuntime {
    /// Register `generator` under `name`, replacing any previous one.
    fn register(&mut self, generator: Arc<dyn Generator>, name: HandlerName);

    /// Run the generator registered under `name` with `options`.
    ///
    /// The generator's outcome is returned unchanged.
    fn run(&mut self, name: HandlerName, options: &ParameterBag) -> Result<GeneratorOutcome>;
}

/// Default runtime backed by a [`GeneratorRegistry`].
#[derive(Debug, Default)]
pub struct GeneratorEnv {
    registry: GeneratorRegistry,
}

impl GeneratorEnv {
    /// Create an environment with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the underlying registry.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }
}

impl GeneratorRuntime for GeneratorEnv {
    fn register(&mut self, generator: Arc<dyn Generator>, name: HandlerName) {
        debug!(generator = %name, target = %generator.describe(), "registering generator");
        self.registry.register(generator, name);
    }

    fn run(&mut self, name: HandlerName, options: &ParameterBag) -> Result<GeneratorOutcome> {
        let generator =
            self.registry
                .get(name)
                .cloned()
                .ok_or_else(|| VulcanError::UnregisteredGenerator {
                    name: name.to_string(),
                })?;

        debug!(generator = %name, options = options.len(), "running generator");
        generator.run(name, options)
    }
}
