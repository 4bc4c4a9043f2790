//! Generators backed by an external program.
//!
//! The program receives:
//! - its configured arguments, then one `--key=value` per present option
//! - `VULCAN_GENERATOR` set to the name it runs as
//! - `VULCAN_OPTIONS` set to the whole bag as a JSON object
//!
//! Stdio is inherited so generators can prompt.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use tracing::debug;

use crate::error::{Result, VulcanError};
use crate::options::ParameterBag;

use super::{Generator, GeneratorOutcome, HandlerName};

/// Environment variable carrying the generator name.
pub const GENERATOR_ENV: &str = "VULCAN_GENERATOR";

/// Environment variable carrying the JSON-encoded options.
pub const OPTIONS_ENV: &str = "VULCAN_OPTIONS";

/// A generator that runs a program.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    program: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandGenerator {
    /// Create a generator running `program` with no extra arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: HashMap::new(),
            cwd: None,
        }
    }

    /// Arguments passed before the generated option arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Extra environment variables (merged with the inherited environment).
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Working directory for the program.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Full argument list for a run with `options`.
    pub fn command_args(&self, options: &ParameterBag) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(options.to_cli_args());
        args
    }
}

impl Generator for CommandGenerator {
    fn run(&self, name: HandlerName, options: &ParameterBag) -> Result<GeneratorOutcome> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(self.command_args(options));
        cmd.env(GENERATOR_ENV, name.as_str());
        cmd.env(OPTIONS_ENV, options.to_json()?);

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| VulcanError::GeneratorSpawn {
            program: self.program.display().to_string(),
            source,
        })?;

        debug!(
            generator = %name,
            program = %self.program.display(),
            code = ?status.code(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generator finished"
        );

        if status.success() {
            Ok(GeneratorOutcome::success())
        } else {
            Ok(GeneratorOutcome::failure(status.code()))
        }
    }

    fn describe(&self) -> String {
        self.program.display().to_string()
    }
}
