//! # datediff CLI
//!
//! Count the number of whole days between two events.

use anyhow::Context;
use clap::Parser;
use datediff::{DEFAULT_DATE_FORMAT, DateFormat, MAX_YEAR, MIN_YEAR, datediff};
use tracing_subscriber::EnvFilter;

/// Count the number of whole days between two events.
///
/// Dates must range between 01/01/1901 and 31/12/2999. The order of the two
/// dates does not matter.
#[derive(Parser, Debug)]
#[command(name = "datediff", version, about)]
struct Cli {
    /// The date of the first event.
    date1: String,

    /// The date of the second event.
    date2: String,

    /// Format of both dates; must contain exactly one each of DD, MM and YYYY.
    #[arg(long, env = "DATEDIFF_DATE_FMT", default_value = DEFAULT_DATE_FORMAT)]
    date_fmt: DateFormat,
}

fn main() -> anyhow::Result<()> {
    // stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, min_year = MIN_YEAR, max_year = MAX_YEAR, "parsed arguments");

    let days = datediff(&cli.date1, &cli.date2, &cli.date_fmt).context("cannot parse date")?;
    println!("{days}");
    Ok(())
}
