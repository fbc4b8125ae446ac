//! Command-line interface.

use anyhow::Result;
use clap::Parser;
use sepnr::{OrganisationNumber, Parser as PnrParser};
use tracing::{debug, info};

use crate::config::{NumberKind, Settings};
use crate::output::{print_header, print_results, OutputFormat, Verification};

/// Verify Swedish personal identity numbers and coordination numbers.
#[derive(Debug, Parser)]
#[command(name = "verifypnr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Identity numbers to verify.
    identity_numbers: Vec<String>,

    /// Reference date that date calculations are based on (YYYY-MM-DD).
    /// Defaults to today.
    #[arg(short, long, env = "VERIFYPNR_REFERENCE_DATE")]
    reference_date: Option<String>,

    /// UTC offset of the calendar dates are interpreted in.
    #[arg(long, env = "VERIFYPNR_UTC_OFFSET", default_value = "+01:00", allow_hyphen_values = true)]
    utc_offset: String,

    /// Output format.
    #[arg(long, env = "VERIFYPNR_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verify organisation numbers instead of personal identity numbers.
    #[arg(long)]
    organisation: bool,
}

/// Outcome of a run.
#[derive(Debug, Default)]
pub struct Summary {
    pub invalid: usize,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

impl Cli {
    /// Verify every argument and print the results.
    pub fn run(self) -> Result<Summary> {
        let settings = Settings::resolve(
            self.reference_date.as_deref(),
            &self.utc_offset,
            self.format,
            self.organisation,
        )?;

        info!(
            reference_date = %settings.reference_date,
            utc_offset = %settings.calendar.offset(),
            count = self.identity_numbers.len(),
            "verifying identity numbers"
        );

        print_header(settings.reference_date, settings.format);

        let results = verify_all(&self.identity_numbers, &settings);
        print_results(&results, settings.format);

        let valid = results.iter().filter(|r| r.is_valid()).count();
        let invalid = results.len() - valid;
        info!(valid, invalid, "verification finished");

        Ok(Summary { invalid })
    }
}

/// Verifies each input independently.
pub fn verify_all(inputs: &[String], settings: &Settings) -> Vec<Verification> {
    let parser = PnrParser::new(settings.calendar);

    inputs
        .iter()
        .map(|input| {
            let result = match settings.kind {
                NumberKind::Personal => parser
                    .parse(input, settings.reference)
                    .map(|pnr| Verification::personal(input, &pnr)),
                NumberKind::Organisation => OrganisationNumber::parse(input)
                    .map(|onr| Verification::organisation(input, &onr)),
            };

            result.unwrap_or_else(|err| {
                debug!(input = %input, error = %err, "verification failed");
                Verification::invalid(input, &err)
            })
        })
        .collect()
}
