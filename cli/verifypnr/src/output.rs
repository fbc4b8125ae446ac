//! Output formatting for verification results.

use chrono::NaiveDate;
use clap::ValueEnum;
use colored::Colorize;
use sepnr::{OrganisationNumber, ParseError, Personnummer};
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A JSON array of results.
    Json,
}

/// The result of verifying one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    Valid {
        input: String,
        normalized: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        birth_date: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        age: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        coordination_number: Option<bool>,
    },
    Invalid {
        input: String,
        kind: &'static str,
        error: String,
    },
}

impl Verification {
    pub fn personal(input: &str, pnr: &Personnummer) -> Self {
        Self::Valid {
            input: input.to_string(),
            normalized: pnr.normalized().to_string(),
            birth_date: Some(pnr.birth_date()),
            age: Some(pnr.age()),
            coordination_number: Some(pnr.is_coordination_number()),
        }
    }

    pub fn organisation(input: &str, onr: &OrganisationNumber) -> Self {
        Self::Valid {
            input: input.to_string(),
            normalized: onr.normalized().to_string(),
            birth_date: None,
            age: None,
            coordination_number: None,
        }
    }

    pub fn invalid(input: &str, err: &ParseError) -> Self {
        Self::Invalid {
            input: input.to_string(),
            kind: error_kind(err),
            error: err.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Stable machine-readable name of a parse error.
pub fn error_kind(err: &ParseError) -> &'static str {
    match err {
        ParseError::Length(_) => "length",
        ParseError::Format => "format",
        ParseError::Checksum { .. } => "checksum",
        ParseError::Date => "date",
        ParseError::ReferenceDate => "reference_date",
    }
}

/// Print the reference date header.
pub fn print_header(reference_date: NaiveDate, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("Parse identity number relative {reference_date}");
    }
}

/// Print all results in the specified format.
pub fn print_results(results: &[Verification], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for result in results {
                print!("{}", format_text(result, true));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Renders one result as text lines.
///
/// The normalized form is only shown when it differs from the input.
pub fn format_text(result: &Verification, color: bool) -> String {
    match result {
        Verification::Valid {
            input,
            normalized,
            age,
            ..
        } => {
            let mut out = format!("{input}\n");
            if normalized != input {
                out.push_str(&format!("  {normalized}\n"));
            }
            if let Some(age) = age {
                out.push_str(&format!("  age {age}\n"));
            }
            out
        }
        Verification::Invalid { input, error, .. } => {
            let error = if color {
                error.red().to_string()
            } else {
                error.clone()
            };
            format!("{input}: {error}\n")
        }
    }
}
