//! Export a generated series to CSV or JSON.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! History rows leave the `actual` column empty once the forecast horizon starts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::SecondsFormat;

use crate::domain::PredictiveDataPoint;
use crate::error::AppError;

/// Write the series as CSV (`date,actual,predicted`).
pub fn write_series_csv(path: &Path, points: &[PredictiveDataPoint]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    write_series_csv_to(&mut file, points)
}

pub fn write_series_csv_to<W: Write>(out: &mut W, points: &[PredictiveDataPoint]) -> Result<(), AppError> {
    writeln!(out, "date,actual,predicted")
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV header: {e}")))?;

    for p in points {
        writeln!(
            out,
            "{},{},{:.4}",
            p.date.to_rfc3339_opts(SecondsFormat::Secs, true),
            p.actual.map(|v| format!("{v:.4}")).unwrap_or_default(),
            p.predicted,
        )
        .map_err(|e| AppError::runtime(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write the series as a pretty-printed JSON array.
pub fn write_series_json(path: &Path, points: &[PredictiveDataPoint]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::usage(format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, points)
        .map_err(|e| AppError::runtime(format!("Failed to write export JSON: {e}")))
}
