//! Configuration schema for `.vulcan/config.yml`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default prefix for generator programs looked up on `PATH`.
pub const DEFAULT_GENERATOR_PREFIX: &str = "vulcan-generator-";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulcanConfig {
    /// Global settings
    pub settings: Settings,

    /// Generator programs by generator name
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub generators: HashMap<String, GeneratorConfig>,
}

/// Global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output mode used when no CLI flag selects one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,

    /// Prefix of generator programs searched on `PATH`
    pub generator_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_output: None,
            generator_prefix: DEFAULT_GENERATOR_PREFIX.to_string(),
        }
    }
}

/// Output verbosity as written in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
}

/// How to run one generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Program to run; relative paths resolve against the project root
    pub command: String,

    /// Arguments placed before the option arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Extra environment variables
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}
