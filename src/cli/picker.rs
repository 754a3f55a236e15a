//! Upload file picker.
//!
//! Stands in for the browser's file dialog: it lists candidate files whose
//! extension passes the upload control's accept filter. The filter is the only
//! check; file contents are never opened.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::upload::has_accepted_extension;

/// Default directory recursion depth for finding upload candidates.
const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Validate that `path` is an existing file with an accepted extension.
pub fn validate_upload_path(path: &Path) -> Result<PathBuf, AppError> {
    if !path.exists() {
        return Err(AppError::usage(format!("File not found: {}", path.display())));
    }
    if path.is_dir() {
        return Err(AppError::usage(format!(
            "Expected a file, got a directory: {}",
            path.display()
        )));
    }
    if !has_accepted_extension(path) {
        return Err(AppError::usage(format!(
            "Expected a .csv, .xlsx or .json file (got: {}).",
            path.display()
        )));
    }

    Ok(path.to_path_buf())
}

/// Discover upload candidates under the current directory (deterministic order).
pub fn discover_upload_files() -> Vec<PathBuf> {
    find_upload_files(Path::new("."), DEFAULT_SEARCH_DEPTH)
}

pub fn find_upload_files(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    let mut out = Vec::new();
    find_upload_files_inner(root, 0, max_depth, &mut out);
    out.sort_by_key(|p| pretty_path(p));
    out
}

fn find_upload_files_inner(root: &Path, depth: usize, max_depth: usize, out: &mut Vec<PathBuf>) {
    if depth > max_depth {
        return;
    }

    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            if should_skip_dir(&path) {
                continue;
            }
            find_upload_files_inner(&path, depth + 1, max_depth, out);
            continue;
        }

        if file_type.is_file() && has_accepted_extension(&path) {
            out.push(path);
        }
    }
}

fn should_skip_dir(path: &Path) -> bool {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
    matches!(name, ".git" | "target" | "node_modules")
}

pub fn pretty_path(path: &Path) -> String {
    let stripped = path.strip_prefix("./").unwrap_or(path);
    stripped.display().to_string()
}
