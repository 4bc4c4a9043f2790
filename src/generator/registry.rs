//! Registry mapping generator names to generators.
//!
//! The [`GeneratorRegistry`] is an owned value: each dispatch builds its
//! own, so nothing is shared between invocations or between tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Generator, HandlerName};

/// Registry of generators available to the current invocation.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<HandlerName, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under `name`.
    ///
    /// A previous registration for the same name is replaced and returned.
    pub fn register(
        &mut self,
        generator: Arc<dyn Generator>,
        name: HandlerName,
    ) -> Option<Arc<dyn Generator>> {
        self.generators.insert(name, generator)
    }

    /// Get the generator registered under `name`.
    pub fn get(&self, name: HandlerName) -> Option<&Arc<dyn Generator>> {
        self.generators.get(&name)
    }

    /// Check whether a generator is registered under `name`.
    pub fn contains(&self, name: HandlerName) -> bool {
        self.generators.contains_key(&name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<HandlerName> {
        let mut names: Vec<_> = self.generators.keys().copied().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.names()
                    .into_iter()
                    .filter_map(|name| self.get(name).map(|g| (name, g.describe()))),
            )
            .finish()
    }
}
