//! Domain types used throughout the dashboard.
//!
//! This module defines:
//!
//! - view selectors (`NavSection`, `PredictionType`)
//! - the synthetic series record (`PredictiveDataPoint`)
//! - static reference record shapes (`Metric`, `RiskMetric`, `CostCategory`, ...)

pub mod types;

pub use types::*;
