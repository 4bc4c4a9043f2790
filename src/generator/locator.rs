//! Locating the program behind a generator name.
//!
//! # Resolution Order
//!
//! First match wins:
//! 1. `generators.<name>` in configuration
//! 2. `.vulcan/generators/<name>` in the project, if executable
//! 3. `<prefix><name>` on `PATH` (prefix defaults to `vulcan-generator-`)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::config::{GeneratorConfig, VulcanConfig, CONFIG_DIR};
use crate::error::{Result, VulcanError};

use super::{CommandGenerator, Generator, GeneratorSource, HandlerName};

/// Finds generator programs for a project.
#[derive(Debug, Clone)]
pub struct GeneratorLocator {
    project_root: PathBuf,
    prefix: String,
    configured: HashMap<String, GeneratorConfig>,
    path_entries: Vec<PathBuf>,
}

impl GeneratorLocator {
    /// Create a locator searching the system `PATH`.
    pub fn new(project_root: &Path, config: &VulcanConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            prefix: config.settings.generator_prefix.clone(),
            configured: config.generators.clone(),
            path_entries: parse_system_path(),
        }
    }

    /// Replace the directories searched instead of `PATH`.
    pub fn with_path_entries(mut self, path_entries: Vec<PathBuf>) -> Self {
        self.path_entries = path_entries;
        self
    }

    /// Directory holding project-local generators.
    pub fn project_generators_dir(&self) -> PathBuf {
        self.project_root.join(CONFIG_DIR).join("generators")
    }

    /// Locate the generator program for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`VulcanError::GeneratorNotFound`] listing the candidates
    /// that were tried.
    pub fn locate(&self, name: HandlerName) -> Result<CommandGenerator> {
        if let Some(configured) = self.configured.get(name.as_str()) {
            let program = self.resolve_configured_command(&configured.command);
            debug!(generator = %name, program = %program.display(), "using configured generator");
            return Ok(CommandGenerator::new(program)
                .with_args(configured.args.clone())
                .with_env(configured.env.clone())
                .with_cwd(&self.project_root));
        }

        let mut searched = Vec::new();

        let local = self.project_generators_dir().join(name.as_str());
        if local.is_file() && is_executable(&local) {
            debug!(generator = %name, program = %local.display(), "using project generator");
            return Ok(CommandGenerator::new(local).with_cwd(&self.project_root));
        }
        searched.push(local);

        let program_name = format!("{}{}", self.prefix, name.as_str());
        if let Some(program) = resolve_tool_path(&program_name, &self.path_entries) {
            debug!(generator = %name, program = %program.display(), "using generator from PATH");
            return Ok(CommandGenerator::new(program).with_cwd(&self.project_root));
        }
        searched.push(PathBuf::from(program_name));

        Err(VulcanError::GeneratorNotFound {
            name: name.to_string(),
            searched,
        })
    }

    /// Resolve a configured command.
    ///
    /// Bare program names are looked up on the search path; anything with
    /// a directory part is taken relative to the project root.
    fn resolve_configured_command(&self, command: &str) -> PathBuf {
        let path = Path::new(command);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        if path.components().count() > 1 {
            return self.project_root.join(path);
        }
        resolve_tool_path(command, &self.path_entries).unwrap_or_else(|| path.to_path_buf())
    }
}

impl GeneratorSource for GeneratorLocator {
    fn resolve(&self, name: HandlerName) -> Result<Arc<dyn Generator>> {
        Ok(Arc::new(self.locate(name)?))
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Find `tool` in the given directories.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system `PATH` into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_with(yaml: &str) -> VulcanConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn configured_relative_command_resolves_against_project_root() {
        let temp = TempDir::new().unwrap();
        let config = config_with(
            "generators:\n  package:\n    command: ./tools/gen-package\n    args: [--fast]\n",
        );
        let locator = GeneratorLocator::new(temp.path(), &config).with_path_entries(vec![]);

        let generator = locator.locate(HandlerName::Package).unwrap();

        assert_eq!(generator.program(), temp.path().join("./tools/gen-package"));
        assert_eq!(generator.args(), ["--fast".to_string()]);
    }

    #[test]
    fn configured_absolute_command_is_kept() {
        let temp = TempDir::new().unwrap();
        let config = config_with("generators:\n  list:\n    command: /opt/gen/list\n");
        let locator = GeneratorLocator::new(temp.path(), &config);

        let generator = locator.locate(HandlerName::List).unwrap();
        assert_eq!(generator.program(), Path::new("/opt/gen/list"));
    }

    #[test]
    fn configured_bare_command_falls_back_to_name() {
        let temp = TempDir::new().unwrap();
        let config = config_with("generators:\n  app:\n    command: yo\n");
        let locator = GeneratorLocator::new(temp.path(), &config).with_path_entries(vec![]);

        let generator = locator.locate(HandlerName::App).unwrap();
        assert_eq!(generator.program(), Path::new("yo"));
    }

    #[test]
    fn missing_generator_reports_candidates() {
        let temp = TempDir::new().unwrap();
        let locator = GeneratorLocator::new(temp.path(), &VulcanConfig::default())
            .with_path_entries(vec![temp.path().to_path_buf()]);

        let err = locator.locate(HandlerName::Route).unwrap_err();
        match err {
            VulcanError::GeneratorNotFound { name, searched } => {
                assert_eq!(name, "route");
                assert_eq!(searched.len(), 2);
                assert!(searched[0].ends_with(".vulcan/generators/route"));
                assert_eq!(searched[1], PathBuf::from("vulcan-generator-route"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn project_generator_is_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR).join("generators");
        fs::create_dir_all(&dir).unwrap();
        make_executable(&dir.join("module"));

        let locator = GeneratorLocator::new(temp.path(), &VulcanConfig::default())
            .with_path_entries(vec![]);
        let generator = locator.locate(HandlerName::Module).unwrap();

        assert_eq!(generator.program(), dir.join("module"));
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_project_generator_is_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR).join("generators");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("module"), "not a program").unwrap();

        let locator = GeneratorLocator::new(temp.path(), &VulcanConfig::default())
            .with_path_entries(vec![]);
        assert!(locator.locate(HandlerName::Module).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn path_generator_uses_prefix() {
        let project = TempDir::new().unwrap();
        let bin = TempDir::new().unwrap();
        make_executable(&bin.path().join("acme-component"));

        let config = config_with("settings:\n  generator_prefix: acme-\n");
        let locator = GeneratorLocator::new(project.path(), &config)
            .with_path_entries(vec![bin.path().to_path_buf()]);

        let generator = locator.locate(HandlerName::Component).unwrap();
        assert_eq!(generator.program(), bin.path().join("acme-component"));
    }

    #[cfg(unix)]
    #[test]
    fn configuration_wins_over_project_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR).join("generators");
        fs::create_dir_all(&dir).unwrap();
        make_executable(&dir.join("remove"));

        let config = config_with("generators:\n  remove:\n    command: /usr/local/bin/rm-gen\n");
        let locator = GeneratorLocator::new(temp.path(), &config).with_path_entries(vec![]);

        let generator = locator.locate(HandlerName::Remove).unwrap();
        assert_eq!(generator.program(), Path::new("/usr/local/bin/rm-gen"));
    }

    #[test]
    fn locator_is_a_generator_source() {
        let temp = TempDir::new().unwrap();
        let config = config_with("generators:\n  unshallow:\n    command: /bin/true\n");
        let locator = GeneratorLocator::new(temp.path(), &config);

        let generator = locator.resolve(HandlerName::Unshallow).unwrap();
        assert_eq!(generator.describe(), "/bin/true");
    }
}
