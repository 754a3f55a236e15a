//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and installs tracing
//! - parses CLI arguments
//! - dispatches to the TUI or one of the print-only commands

use chrono::Utc;
use clap::Parser;

use crate::cli::{Command, SeriesArgs, ShowArgs, TuiArgs, UploadArgs};
use crate::config::Settings;
use crate::error::AppError;
use crate::logging::{LogTarget, init_tracing};
use crate::upload::{ConsoleNotifier, FileSelectHandler, FileSelection};

pub mod pipeline;

/// Entry point for the `insight` binary.
pub fn run() -> Result<(), AppError> {
    // We want `insight` and `insight -s predictions` to behave like `insight tui ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    let settings = Settings::from_env()?;

    match cli.command {
        Command::Tui(args) => handle_tui(settings, args),
        Command::Series(args) => handle_series(settings, args),
        Command::Show(args) => handle_show(settings, args),
        Command::Upload(args) => handle_upload(settings, args),
    }
}

fn handle_tui(settings: Settings, args: TuiArgs) -> Result<(), AppError> {
    let settings = settings.with_seed_override(args.seed);
    init_tracing(&settings, LogTarget::File(settings.log_file.clone()))?;
    tracing::info!(section = args.section.name(), seeded = settings.seed.is_some(), "starting tui");
    crate::tui::run(settings, args.section)
}

fn handle_series(settings: Settings, args: SeriesArgs) -> Result<(), AppError> {
    let settings = settings.with_seed_override(args.seed);
    init_tracing(&settings, LogTarget::Stderr)?;

    let start = pipeline::resolve_start(args.start, Utc::now());
    let points = pipeline::series_for(&settings, start);
    tracing::debug!(start = %start, n = points.len(), "generated series");

    if args.json {
        let json = serde_json::to_string_pretty(&points)
            .map_err(|e| AppError::runtime(format!("Failed to serialize series: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_series_table(&points));
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::write_series_csv(path, &points)?;
        tracing::info!(path = %path.display(), "wrote series CSV");
    }
    if let Some(path) = &args.export_json {
        crate::io::write_series_json(path, &points)?;
        tracing::info!(path = %path.display(), "wrote series JSON");
    }

    Ok(())
}

fn handle_show(settings: Settings, args: ShowArgs) -> Result<(), AppError> {
    let settings = settings.with_seed_override(args.seed);
    init_tracing(&settings, LogTarget::Stderr)?;

    let content = pipeline::content_for(&settings, &args.section, args.prediction, Utc::now());
    let text = crate::report::format_content(&content);
    if !text.is_empty() {
        print!("{text}");
    }
    Ok(())
}

fn handle_upload(settings: Settings, args: UploadArgs) -> Result<(), AppError> {
    init_tracing(&settings, LogTarget::Stderr)?;

    let path = crate::cli::picker::validate_upload_path(&args.path)?;
    let mut handler =
        FileSelectHandler::new(ConsoleNotifier).toast_duration(settings.toast_duration);
    handler.handle(Some(FileSelection::from_path(path)));
    Ok(())
}

/// Rewrite argv so `insight` defaults to `insight tui`.
///
/// Rules:
/// - `insight`                          -> `insight tui`
/// - `insight -s predictions ...`       -> `insight tui -s predictions ...`
/// - `insight --help/--version/-h`      -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "series" | "show" | "upload");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
