//! CLI argument definitions.
//!
//! Global flags come before the action. Everything from the action on is
//! kept verbatim in [`Cli::action`] and interpreted by the resolver, so
//! generator options such as `--style=less` pass through untouched.

use clap::Parser;
use std::path::PathBuf;

/// Actions listed in `--help`.
pub const ACTIONS_HELP: &str = "\
Actions:
  create <appName>
  generate package <packageName>
  generate module <packageName> <moduleName>
  generate component <packageName> <componentName>
  generate route <packageName> <routeName> <routePath> <componentName> <layoutName>
  remove [package|module|route] [<packageName> [<name>]]
  list <package|module|component|route> [<packageName>]
  unshallow <component>

Options after the action are passed to the generator.";

/// vulcan - Command-line dispatcher for VulcanJS code generators.
#[derive(Debug, Parser)]
#[command(name = "vulcan")]
#[command(author, version, about, long_about = None)]
#[command(after_help = ACTIONS_HELP)]
pub struct Cli {
    /// Path to config file (overrides .vulcan/config.yml discovery)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides discovery from current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Show errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print the generator and options instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Action followed by its arguments and generator options
    #[arg(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub action: Vec<String>,
}
