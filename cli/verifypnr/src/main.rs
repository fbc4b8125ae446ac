//! verifypnr - verify Swedish identity numbers from the command line.
//!
//! Each argument is parsed independently; a failure is reported and the
//! remaining arguments are still verified.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    match cli.run() {
        Ok(summary) if summary.all_valid() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            error::print_error(&e);
            std::process::exit(2);
        }
    }
}
