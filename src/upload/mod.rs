//! File selection handling.
//!
//! Choosing a file only announces it: the name is logged, a success toast is
//! raised, and the file is handed to a [`FileProcessor`]. No file content is
//! read anywhere. Processing is an extension point whose default
//! ([`DeferredProcessor`]) does nothing.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Extensions offered by the upload control's picker.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "json"];

pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully! Analyzing data...";
pub const UPLOAD_SUCCESS_ICON: &str = "📊";
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

/// True when `path` carries one of [`ACCEPTED_EXTENSIONS`] (case-insensitive).
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        == Some(true)
}

/// A file chosen by the user. Only the handle is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub path: PathBuf,
    pub name: String,
}

impl FileSelection {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub icon: &'static str,
    pub duration: Duration,
    pub position: ToastPosition,
}

impl Toast {
    pub fn upload_success(duration: Duration) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            icon: UPLOAD_SUCCESS_ICON,
            duration,
            position: ToastPosition::TopRight,
        }
    }
}

/// Receives user-facing notifications.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// What a processor did with a selected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Processing is not implemented; the file was left untouched.
    Deferred,
}

/// Hook for analysing an uploaded file.
pub trait FileProcessor {
    fn process(&mut self, file: &FileSelection) -> ProcessOutcome;
}

/// Default processor: accepts the handle and does nothing with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredProcessor;

impl FileProcessor for DeferredProcessor {
    fn process(&mut self, file: &FileSelection) -> ProcessOutcome {
        tracing::debug!(file = %file.name, "file processing not implemented, skipping");
        ProcessOutcome::Deferred
    }
}

/// Wires a selection to its notifier and processor.
pub struct FileSelectHandler<N, P = DeferredProcessor> {
    notifier: N,
    processor: P,
    toast_duration: Duration,
}

impl<N: Notifier> FileSelectHandler<N, DeferredProcessor> {
    pub fn new(notifier: N) -> Self {
        Self::with_processor(notifier, DeferredProcessor)
    }
}

impl<N: Notifier, P: FileProcessor> FileSelectHandler<N, P> {
    pub fn with_processor(notifier: N, processor: P) -> Self {
        Self {
            notifier,
            processor,
            toast_duration: DEFAULT_TOAST_DURATION,
        }
    }

    #[must_use]
    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    /// Handle the result of a picker interaction.
    ///
    /// `None` (picker dismissed) is ignored silently.
    pub fn handle(&mut self, selection: Option<FileSelection>) -> Option<ProcessOutcome> {
        let file = selection?;
        tracing::info!(file = %file.name, path = %file.path.display(), "Selected file");
        self.notifier.notify(Toast::upload_success(self.toast_duration));
        Some(self.processor.process(&file))
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

/// Collects toasts in memory; the TUI drains it after each selection.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: Vec<Toast>,
}

impl ToastQueue {
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast) {
        self.pending.push(toast);
    }
}

/// Prints toasts to stdout, for the `upload` CLI command.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, toast: Toast) {
        println!("{} {}", toast.icon, toast.message);
    }
}
