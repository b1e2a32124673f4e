//! Library side of the `check-registration` command.
//!
//! The binary parses arguments, initialises logging, and prints what this
//! module returns, so the whole flow can be exercised without spawning a
//! process.

mod error;

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use chrono::NaiveDate;
use clap::Parser;
use mockable::Clock;
use ortho_config::OrthoConfig;
use serde_json::Value;
use tracing::{debug, info};

pub use error::CheckError;

use crate::error::FieldError;
use crate::settings::ValidationSettings;
use crate::user::{ValidationConfig, collect_user_errors};

/// Name the command reports itself as, also used when loading settings.
pub const BIN_NAME: &str = "check-registration";

/// `check-registration` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "check-registration",
    about = "Validate a user registration record and list failing fields",
    version
)]
pub struct CheckArgs {
    /// JSON file holding the record. Reads stdin when omitted.
    #[arg(long, value_name = "path")]
    pub input: Option<PathBuf>,
    /// Record shape: `name-username` or `first-last`.
    #[arg(long, value_name = "shape")]
    pub shape: Option<String>,
    /// Postal code format: `five-digit` or `zip-plus-four`.
    #[arg(long = "postal-format", value_name = "format")]
    pub postal_format: Option<String>,
    /// Custom postal code pattern, matched against the whole value.
    #[arg(long = "postal-pattern", value_name = "regex")]
    pub postal_pattern: Option<String>,
    /// Date ages are computed against. Defaults to today (UTC).
    #[arg(long = "reference-date", value_name = "YYYY-MM-DD", value_parser = parse_reference_date)]
    pub reference_date: Option<NaiveDate>,
}

/// Whether the checked record passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every field passed.
    Valid,
    /// At least one field failed.
    Invalid,
}

impl CheckOutcome {
    /// Process exit status: 0 for a valid record, 1 otherwise.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
        }
    }
}

/// Field errors found in one record.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    errors: Vec<FieldError>,
}

impl CheckReport {
    /// Outcome implied by the errors.
    #[must_use]
    pub fn outcome(&self) -> CheckOutcome {
        if self.errors.is_empty() {
            CheckOutcome::Valid
        } else {
            CheckOutcome::Invalid
        }
    }

    /// Failing fields in shape order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Pretty-printed JSON array of the field errors.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Report`] when serialisation fails.
    pub fn render(&self) -> Result<String, CheckError> {
        serde_json::to_string_pretty(&self.errors).map_err(CheckError::Report)
    }
}

/// Load settings and apply the command line overrides on top.
///
/// # Errors
///
/// Returns [`CheckError::Settings`] when loading fails and
/// [`CheckError::Config`] when a value cannot be resolved.
pub fn resolve_config(args: &CheckArgs) -> Result<ValidationConfig, CheckError> {
    let mut settings = ValidationSettings::load_from_iter([OsString::from(BIN_NAME)])
        .map_err(|error| CheckError::Settings {
            message: error.to_string(),
        })?;
    if let Some(shape) = &args.shape {
        settings.record_shape = Some(shape.clone());
    }
    if let Some(format) = &args.postal_format {
        settings.postal_code_format = Some(format.clone());
    }
    if let Some(pattern) = &args.postal_pattern {
        settings.postal_code_pattern = Some(pattern.clone());
    }
    Ok(settings.validation_config()?)
}

/// Run the command: resolve the config, read the record from `--input` or
/// `stdin`, and collect every field error.
///
/// Without `--reference-date` the UTC date from `clock` is used.
///
/// # Errors
///
/// Returns a [`CheckError`] when settings, input, or JSON parsing fail.
pub fn check_registration(
    args: &CheckArgs,
    stdin: impl Read,
    clock: &dyn Clock,
) -> Result<CheckReport, CheckError> {
    let config = resolve_config(args)?;
    let raw = match args.input.as_deref() {
        Some(path) => read_input_file(path)?,
        None => read_to_string(stdin)?,
    };
    let record: Value = serde_json::from_str(&raw).map_err(CheckError::Json)?;
    let reference_date = args
        .reference_date
        .unwrap_or_else(|| clock.utc().date_naive());

    debug!(shape = %config.record_shape, %reference_date, "validating record");
    let report = CheckReport {
        errors: collect_user_errors(&record, &config, reference_date),
    };
    match report.outcome() {
        CheckOutcome::Valid => info!("record is valid"),
        CheckOutcome::Invalid => info!(failures = report.errors.len(), "record is invalid"),
    }
    Ok(report)
}

/// Parse a `--reference-date` value.
///
/// # Errors
///
/// Returns a message when `raw` is not a `YYYY-MM-DD` date.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| format!("reference date must be YYYY-MM-DD: {error}"))
}

fn read_input_file(path: &Path) -> Result<String, CheckError> {
    let input_error = |message: String| CheckError::Input {
        path: path.to_path_buf(),
        message,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| input_error("input path must be a file".to_owned()))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| input_error(format!("open parent directory: {error}")))?;
    directory
        .read_to_string(Path::new(file_name))
        .map_err(|error| input_error(error.to_string()))
}

fn read_to_string(mut reader: impl Read) -> Result<String, CheckError> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .map_err(CheckError::Stdin)?;
    Ok(raw)
}
