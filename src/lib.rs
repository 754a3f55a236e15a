//! `insight-dash` library crate.
//!
//! The binary (`insight`) is a thin wrapper around this library so that:
//!
//! - routing and series generation are testable without a terminal
//! - the TUI and the print-only CLI commands share one code path

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod router;
pub mod tui;
pub mod upload;
