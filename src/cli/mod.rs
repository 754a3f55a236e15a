//! Command-line parsing for the insight dashboard.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! routing/generation code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::{NavSection, PredictionType};

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "insight", version, about = "Business insight dashboard (synthetic data)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Launch the interactive dashboard.
    Tui(TuiArgs),
    /// Print a freshly generated forecast series.
    Series(SeriesArgs),
    /// Print what a section would render.
    Show(ShowArgs),
    /// Announce a file as if chosen in the upload panel.
    Upload(UploadArgs),
}

#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    /// Section to open on start.
    #[arg(short = 's', long, value_enum, default_value_t = NavSection::Dashboard)]
    pub section: NavSection,

    /// Seed for the synthetic series (overrides INSIGHT_SEED).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct SeriesArgs {
    /// First date of the series (UTC midnight). Defaults to now.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start: Option<NaiveDate>,

    /// Seed for the synthetic series (overrides INSIGHT_SEED).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Write the series to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Write the series to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Section name (dashboard, predictions, analytics, settings).
    ///
    /// Unrecognized names print nothing.
    pub section: String,

    /// Selected prediction mode.
    #[arg(short = 'p', long, value_enum)]
    pub prediction: Option<PredictionType>,

    /// Seed for the synthetic series (overrides INSIGHT_SEED).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Args, Clone)]
pub struct UploadArgs {
    /// File to announce (.csv, .xlsx or .json). Its content is not read.
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_series_flags() {
        let cli = Cli::parse_from(["insight", "series", "--start", "2024-01-01", "--seed", "4", "--json"]);
        let Command::Series(args) = cli.command else {
            panic!("expected series");
        };
        assert_eq!(args.start, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(args.seed, Some(4));
        assert!(args.json);
    }

    #[test]
    fn show_accepts_any_section_name() {
        let cli = Cli::parse_from(["insight", "show", "reports", "-p", "risk"]);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.section, "reports");
        assert_eq!(args.prediction, Some(PredictionType::Risk));
    }

    #[test]
    fn tui_defaults_to_dashboard() {
        let cli = Cli::parse_from(["insight", "tui"]);
        let Command::Tui(args) = cli.command else {
            panic!("expected tui");
        };
        assert_eq!(args.section, NavSection::Dashboard);
        assert_eq!(args.seed, None);
    }
}
