//! Configuration file discovery and loading.
//!
//! Every file is optional. Files are merged in this order, later wins:
//! 1. User global config (`~/.vulcan/config.yml`)
//! 2. Project config (`.vulcan/config.yml`)
//! 3. Local overrides (`.vulcan/config.local.yml`)

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::merger::merge_configs;
use crate::config::schema::VulcanConfig;
use crate::error::{Result, VulcanError};
use crate::generator::HandlerName;

/// Name of the per-project and per-user configuration directory.
pub const CONFIG_DIR: &str = ".vulcan";

/// Paths to existing configuration files.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.vulcan/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .vulcan/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .vulcan/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files using an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        let config_dir = project_root.join(CONFIG_DIR);
        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join("config.yml"))),
            project: existing(config_dir.join("config.yml")),
            project_local: existing(config_dir.join("config.local.yml")),
        }
    }

    /// All existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Find the project root by walking up from `start`.
///
/// The nearest directory containing `.vulcan/` wins; a `.git` entry is
/// the fallback marker.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file as a raw YAML value.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VulcanError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VulcanError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| VulcanError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist and
/// `ConfigParseError` if it isn't a valid config.
pub fn load_config_file(path: &Path) -> Result<VulcanConfig> {
    let value = load_config_value(path)?;
    parse_value(value, path)
}

/// Load and merge the discovered config files.
///
/// Returns the default configuration when no file exists. When the merged
/// result is invalid, the error names the first file that is invalid on its
/// own, falling back to the last file merged.
pub fn load_merged(paths: &ConfigPaths) -> Result<VulcanConfig> {
    let existing = paths.all_existing();
    let Some(last) = existing.last() else {
        debug!("no configuration files found, using defaults");
        return Ok(VulcanConfig::default());
    };

    let mut values = Vec::with_capacity(existing.len());
    for path in &existing {
        debug!(path = %path.display(), "loading config");
        values.push(load_config_value(path)?);
    }

    match deserialize(merge_configs(&values), last) {
        Ok(config) => {
            warn_unknown_generators(&config);
            Ok(config)
        }
        Err(merged_err) => {
            for (path, value) in existing.iter().zip(values) {
                deserialize(value, path)?;
            }
            Err(merged_err)
        }
    }
}

/// Load and merge all config files for a project.
pub fn load_merged_config(project_root: &Path) -> Result<VulcanConfig> {
    load_merged(&ConfigPaths::discover(project_root))
}

/// Load config with optional path override.
///
/// An override is loaded on its own, without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<VulcanConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

fn parse_value(value: serde_yaml::Value, source_path: &Path) -> Result<VulcanConfig> {
    let config = deserialize(value, source_path)?;
    warn_unknown_generators(&config);
    Ok(config)
}

fn deserialize(value: serde_yaml::Value, source_path: &Path) -> Result<VulcanConfig> {
    // An empty file parses as null.
    let value = if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    };

    serde_yaml::from_value(value).map_err(|e| VulcanError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn warn_unknown_generators(config: &VulcanConfig) {
    for name in config.generators.keys() {
        if name.parse::<HandlerName>().is_err() {
            warn!(generator = %name, "ignoring configuration for unknown generator");
        }
    }
}
