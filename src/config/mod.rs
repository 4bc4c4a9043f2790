//! Configuration loading for vulcan.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//!
//! # Example
//!
//! ```
//! use vulcan::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".vulcan");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "generators:\n  package:\n    command: gen-pkg\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.generators["package"].command, "gen-pkg");
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged,
    load_merged_config, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{GeneratorConfig, OutputMode, Settings, VulcanConfig, DEFAULT_GENERATOR_PREFIX};
