//! Reporting utilities: text renditions of series and section content.

pub mod format;

pub use format::*;
