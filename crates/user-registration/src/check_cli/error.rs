//! Error types for the `check-registration` command.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::ConfigError;

/// Failures that stop the command before a report can be produced.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader diagnostic.
        message: String,
    },
    /// Loaded settings named an unknown shape or format, or a bad pattern.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The `--input` file could not be read.
    #[error("failed to read '{path}': {message}")]
    Input {
        /// Path as supplied.
        path: PathBuf,
        /// Filesystem diagnostic.
        message: String,
    },
    /// Standard input could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
    /// The record is not a JSON document.
    #[error("record is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    /// The field errors could not be rendered.
    #[error("failed to render report: {0}")]
    Report(#[source] serde_json::Error),
}

impl CheckError {
    /// Process exit status for any failure to produce a report.
    pub const EXIT_CODE: u8 = 2;
}
