// Command Line Interface
// clap definitions plus input checks and user-facing error text

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{AppError, FetchError};

/// NeoWs caps a feed request at seven days
pub const MAX_FEED_SPAN_DAYS: i64 = 7;

pub const MISSING_ID_MESSAGE: &str = "Please enter a valid NASA NEO Reference ID.";

#[derive(Debug, Parser)]
#[command(name = "neo-impact", version, about = "NASA NEO comprehensive impact analysis")]
pub struct Cli {
    /// NASA API key (overrides NASA_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// NeoWs base URL (overrides NEOWS_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one NEO and print its impact risk report
    Analyze {
        /// NASA NEO reference id, e.g. 2000433 (Eros)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        reference_id: Option<String>,

        /// Analyze a NeoWs JSON record from disk instead of fetching
        #[arg(long)]
        file: Option<PathBuf>,

        /// Reference date (YYYY-MM-DD, UTC); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the structured analysis as JSON
        #[arg(long)]
        json: bool,

        /// Write the report to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List NEOs approaching Earth in a date range
    Feed {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD), at most seven days after start
        #[arg(long)]
        end: NaiveDate,
    },
}

/// Trimmed reference id; blank input is rejected before any request is made
pub fn normalize_reference_id(raw: &str) -> Result<&str, AppError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(AppError::input(MISSING_ID_MESSAGE));
    }
    Ok(id)
}

pub fn validate_feed_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::input(format!(
            "end date {} is before start date {}",
            end, start
        )));
    }
    let span = (end - start).num_days();
    if span > MAX_FEED_SPAN_DAYS {
        return Err(AppError::input(format!(
            "feed range spans {} days, NeoWs allows at most {}",
            span, MAX_FEED_SPAN_DAYS
        )));
    }
    Ok(())
}

/// User-facing text for a failed command
pub fn describe_error(err: &AppError) -> String {
    match err {
        AppError::Fetch(FetchError::NotFound(id)) => format!(
            "NEO with ID '{}' not found in NASA database.\nTry these example IDs: 2099942 (Apophis), 2000433 (Eros)",
            id
        ),
        AppError::Fetch(FetchError::Connection(e)) => format!(
            "Connection Error: Failed to reach NASA API. Check internet connection. Error: {}",
            e
        ),
        AppError::Fetch(FetchError::Http { status, message }) => {
            format!("HTTP Error: {} - {}", status, message)
        }
        other => format!("An unexpected error occurred: {}", other),
    }
}
