//! Dashboard data: static reference datasets plus the synthetic series generator.

pub mod reference;
pub mod series;

pub use reference::*;
pub use series::{RandomSource, RngSource, SeriesSummary, generate_series};
