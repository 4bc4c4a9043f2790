//! Error types for vulcan operations.
//!
//! This module defines [`VulcanError`], the error type used throughout
//! the dispatcher, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Routing problems the user can fix (an unknown verb) are usage errors
//! - A generator that runs and fails is *not* an error here; its outcome
//!   is forwarded unchanged (see [`crate::generator::GeneratorOutcome`])
//! - Use `anyhow::Error` (via `VulcanError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vulcan operations.
#[derive(Debug, Error)]
pub enum VulcanError {
    /// The command line does not name a known action.
    #[error("Unrecognized action: {input}")]
    UnrecognizedAction { input: String },

    /// A generator was invoked under a name that was never registered.
    #[error("Generator '{name}' was invoked before it was registered")]
    UnregisteredGenerator { name: String },

    /// No program could be located for a generator.
    #[error("No generator found for '{name}' (searched: {})", format_searched(.searched))]
    GeneratorNotFound { name: String, searched: Vec<PathBuf> },

    /// The generator program could not be started.
    #[error("Failed to start generator '{program}': {source}")]
    GeneratorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON conversion error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VulcanError {
    /// Whether this error was caused by how the command was typed.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::UnrecognizedAction { .. })
    }
}

fn format_searched(searched: &[PathBuf]) -> String {
    if searched.is_empty() {
        return "nothing".to_string();
    }
    searched
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for vulcan operations.
pub type Result<T> = std::result::Result<T, VulcanError>;
