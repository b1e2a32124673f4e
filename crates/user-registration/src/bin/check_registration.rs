//! Validate one registration record and report every failing field.
//!
//! This binary delegates to `user_registration::check_cli`. It prints the
//! field errors as a JSON array and exits 0 when the record is valid, 1 when
//! it is not, and 2 when the record or settings cannot be loaded.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use mockable::DefaultClock;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_registration::check_cli::{CheckArgs, CheckError, check_registration};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CheckArgs::parse();
    let outcome = check_registration(&args, io::stdin().lock(), &DefaultClock)
        .and_then(|report| Ok((report.render()?, report.outcome())));
    match outcome {
        Ok((rendered, outcome)) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
                report_failure(&format!("failed to write report: {err}"));
                return ExitCode::from(CheckError::EXIT_CODE);
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            report_failure(&err.to_string());
            ExitCode::from(CheckError::EXIT_CODE)
        }
    }
}

fn report_failure(message: &str) {
    if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
        drop(write_err);
    }
}
