//! Shared "state → data" logic used by the CLI commands.
//!
//! Both `insight series` and `insight show` resolve a start instant and a
//! random source the same way, then hand off to the generator or the router.

use chrono::{DateTime, NaiveDate, Utc};
use rand::rngs::StdRng;

use crate::config::Settings;
use crate::data::{RngSource, generate_series};
use crate::domain::{PredictionType, PredictiveDataPoint};
use crate::router::{ContentDescriptor, ViewState, select_content_by_name};

/// Start instant for a series: UTC midnight of `start`, or now.
pub fn resolve_start(start: Option<NaiveDate>, now: DateTime<Utc>) -> DateTime<Utc> {
    start
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

pub fn random_source(settings: &Settings) -> RngSource<StdRng> {
    RngSource::from_seed_option(settings.seed)
}

/// Generate one series for the CLI.
pub fn series_for(settings: &Settings, start: DateTime<Utc>) -> Vec<PredictiveDataPoint> {
    let mut rng = random_source(settings);
    generate_series(start, &mut rng)
}

/// Content for a section name and an optional prediction choice.
pub fn content_for(
    settings: &Settings,
    section: &str,
    prediction: Option<PredictionType>,
    now: DateTime<Utc>,
) -> ContentDescriptor {
    let state = ViewState::default().set_selected_prediction(prediction);
    let mut rng = random_source(settings);
    select_content_by_name(section, &state, now, &mut rng)
}
