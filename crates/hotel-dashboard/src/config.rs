//! # Dashboard Configuration
//!
//! Command-line flags with environment fallbacks, validated into a
//! [`Config`] before any analysis runs.

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, ValueEnum};

use hotel_analytics::revenue::validate_year;
use hotel_domain::DateRange;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

/// Raw command-line arguments
#[derive(Parser, Debug)]
#[command(name = "hotel-dashboard")]
#[command(about = "Occupancy, revenue and booking-pattern reports for the hotel reservation system")]
pub struct Args {
    /// JSON snapshot of reservations, payments, rooms, room types and customers
    #[arg(long, env = "HOTEL_SNAPSHOT_PATH", default_value = "data/snapshot.json")]
    pub snapshot: PathBuf,

    /// Revenue report year (defaults to the current year)
    #[arg(long, env = "HOTEL_REPORT_YEAR")]
    pub year: Option<i32>,

    /// Length of the occupancy window in days
    #[arg(long, env = "HOTEL_OCCUPANCY_DAYS", default_value = "30")]
    pub days: u32,

    /// Last day of the occupancy window (defaults to today)
    #[arg(long, env = "HOTEL_OCCUPANCY_END")]
    pub end_date: Option<NaiveDate>,

    /// Directory to write chart series into; no charts when unset
    #[arg(long, env = "HOTEL_CHARTS_DIR")]
    pub charts_dir: Option<PathBuf>,

    /// Report format
    #[arg(long, env = "HOTEL_OUTPUT_FORMAT", value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "LOG_FORMAT_JSON")]
    pub log_json: bool,
}

/// Validated dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    pub year: i32,
    pub occupancy_range: DateRange,
    pub charts_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Resolve defaults against `today` and validate.
    pub fn from_args(args: Args, today: NaiveDate) -> anyhow::Result<Self> {
        if args.days == 0 {
            bail!("occupancy window must span at least one day");
        }

        let year = args.year.unwrap_or_else(|| today.year());
        validate_year(year).with_context(|| format!("invalid --year {year}"))?;

        let end = args.end_date.unwrap_or(today);
        let occupancy_range =
            DateRange::trailing_days(end, args.days).context("invalid occupancy window")?;

        Ok(Self {
            snapshot_path: args.snapshot,
            year,
            occupancy_range,
            charts_dir: args.charts_dir,
            format: args.format,
            log_level: args.log_level,
            log_json: args.log_json,
        })
    }
}
