//! Command dispatching.
//!
//! [`CommandDispatcher`] wires the pieces together for one invocation:
//! load configuration, split the action tokens into flags and positionals,
//! resolve the action, then either preview it (`--dry-run`) or hand it to
//! a [`Dispatcher`] backed by a fresh [`GeneratorEnv`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::action::ParsedAction;
use crate::cli::args::{Cli, ACTIONS_HELP};
use crate::config::{load_config, VulcanConfig};
use crate::dispatch::{plan_options, route, Dispatcher};
use crate::error::Result;
use crate::generator::{GeneratorEnv, GeneratorLocator};
use crate::options::{parse_args, ParsedArgs};
use crate::ui::{OutputMode, UserInterface};

/// Exit code for usage errors.
pub const USAGE_EXIT_CODE: i32 = 2;

/// Vulcan's own flags that only take effect before the action.
const GLOBAL_FLAGS: [&str; 4] = ["dry-run", "debug", "quiet", "verbose"];

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches a command line to its generator.
pub struct CommandDispatcher {
    project_root: PathBuf,
    path_entries: Option<Vec<PathBuf>>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            path_entries: None,
        }
    }

    /// Search these directories for generators instead of `PATH`.
    pub fn with_path_entries(mut self, path_entries: Vec<PathBuf>) -> Self {
        self.path_entries = Some(path_entries);
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute the command line.
    ///
    /// Usage errors are reported through `ui` and turned into a failed
    /// result with [`USAGE_EXIT_CODE`]; other errors are returned.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;

        // Config default_output applies when no CLI flag was set
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.settings.default_output {
                ui.set_output_mode(mode.into());
            }
        }

        let args = parse_args(&cli.action);
        for flag in GLOBAL_FLAGS {
            if args.flags.contains_key(flag) {
                ui.warning(&format!(
                    "--{flag} after the action is passed to the generator; put it before the action to apply it to vulcan"
                ));
            }
        }

        match self.execute(cli, &config, &args, ui) {
            Err(e) if e.is_usage_error() => {
                ui.error(&e.to_string());
                ui.message(ACTIONS_HELP);
                Ok(CommandResult::failure(USAGE_EXIT_CODE))
            }
            other => other,
        }
    }

    fn execute(
        &self,
        cli: &Cli,
        config: &VulcanConfig,
        args: &ParsedArgs,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let action = ParsedAction::from_positionals(&args.positionals)?;
        let params = route(&action)?;
        let handler = params.handler();

        if cli.dry_run {
            let options = plan_options(&params, &args.flags)?;
            ui.message(&format!("Would run generator '{}' with options:", handler));
            ui.message(&serde_json::to_string_pretty(&options)?);
            return Ok(CommandResult::success());
        }

        let mut locator = GeneratorLocator::new(&self.project_root, config);
        if let Some(entries) = &self.path_entries {
            locator = locator.with_path_entries(entries.clone());
        }

        ui.detail(&format!("Running generator '{}' for: {}", handler, action));
        debug!(project_root = %self.project_root.display(), "dispatching {}", action);

        let mut dispatcher = Dispatcher::new(locator, GeneratorEnv::new());
        let outcome = dispatcher.dispatch(&action, &args.flags)?;

        if outcome.success {
            ui.success(&format!("Generator '{}' finished", handler));
            Ok(CommandResult::success())
        } else {
            let code = outcome.process_exit_code();
            ui.error(&format!("Generator '{}' failed (exit code {})", handler, code));
            Ok(CommandResult::failure(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vulcan").chain(args.iter().copied()))
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn dry_run_prints_generator_and_options() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let result = dispatcher
            .dispatch(
                &cli(&["--dry-run", "generate", "package", "blog", "--force"]),
                &mut ui,
            )
            .unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_message("Would run generator 'package'"));
        assert!(ui.has_message(r#""packageName": "blog""#));
        assert!(ui.has_message(r#""force": "true""#));
    }

    #[test]
    fn trailing_global_flag_is_warned_about() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        dispatcher
            .dispatch(
                &cli(&["--dry-run", "create", "myApp", "--verbose"]),
                &mut ui,
            )
            .unwrap();

        assert!(ui.has_warning("--verbose after the action"));
        assert!(ui.has_message(r#""verbose": "true""#));
        assert_eq!(ui.warnings().len(), 1);
    }

    #[test]
    fn generator_options_do_not_warn() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        dispatcher
            .dispatch(&cli(&["--dry-run", "create", "myApp", "--style=less"]), &mut ui)
            .unwrap();

        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn unknown_action_is_usage_error() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli(&["deploy"]), &mut ui).unwrap();

        assert_eq!(result, CommandResult::failure(USAGE_EXIT_CODE));
        assert!(ui.has_error("Unrecognized action: deploy"));
        assert!(ui.has_message("Actions:"));
    }

    #[test]
    fn missing_generator_is_error() {
        let temp = TempDir::new().unwrap();
        let dispatcher =
            CommandDispatcher::new(temp.path().to_path_buf()).with_path_entries(vec![]);
        let mut ui = MockUI::new();

        let err = dispatcher
            .dispatch(&cli(&["create", "myApp"]), &mut ui)
            .unwrap_err();
        assert!(err.to_string().contains("No generator found for 'app'"));
    }

    #[test]
    fn config_default_output_applies() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".vulcan");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "settings:\n  default_output: verbose\n").unwrap();

        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();
        dispatcher
            .dispatch(&cli(&["--dry-run", "list", "module"]), &mut ui)
            .unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }

    #[cfg(unix)]
    #[test]
    fn successful_generator_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".vulcan").join("generators");
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("package");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let dispatcher =
            CommandDispatcher::new(temp.path().to_path_buf()).with_path_entries(vec![]);
        let mut ui = MockUI::new();
        let result = dispatcher
            .dispatch(&cli(&["generate", "package", "blog"]), &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::success());
        assert_eq!(ui.successes(), ["Generator 'package' finished".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn runs_project_generator_and_forwards_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".vulcan").join("generators");
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("remove");
        fs::write(&script, "#!/bin/sh\necho \"$@\" > removed.txt\nexit 5\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let dispatcher =
            CommandDispatcher::new(temp.path().to_path_buf()).with_path_entries(vec![]);
        let mut ui = MockUI::new();
        let result = dispatcher
            .dispatch(&cli(&["remove", "package", "blog"]), &mut ui)
            .unwrap();

        assert_eq!(result, CommandResult::failure(5));
        assert!(ui.has_error("Generator 'remove' failed (exit code 5)"));
        let recorded = fs::read_to_string(temp.path().join("removed.txt")).unwrap();
        assert_eq!(
            recorded.trim(),
            "--packageName=blog --vulcanjsComponent=package"
        );
    }
}
