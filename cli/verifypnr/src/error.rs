//! Error handling and display for the CLI.

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("not a date: {0} (expected YYYY-MM-DD)")]
    InvalidReferenceDate(String),

    #[error("not a UTC offset: {0} (expected +HH:MM or -HH:MM)")]
    InvalidUtcOffset(String),

    #[error("reference date {0} cannot be placed in the calendar")]
    UnrepresentableDate(chrono::NaiveDate),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(CliError::InvalidReferenceDate(_)) = err.downcast_ref::<CliError>() {
        eprintln!(
            "\n{}",
            "Hint: pass the reference date as --reference-date 2017-12-12.".yellow()
        );
    }
}
