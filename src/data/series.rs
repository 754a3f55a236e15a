//! Synthetic revenue series for the forecast chart.
//!
//! Each point pairs a "predicted" value with an optional "actual" value. The
//! first `HISTORY_LEN` points model observed history and carry both; the rest
//! model the forecast horizon and carry only a prediction.
//!
//! Values are placeholder noise: two independent uniform draws on disjoint base
//! offsets. Nothing is cached, so every call yields a fresh sequence.

use chrono::{DateTime, Days, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::PredictiveDataPoint;

/// Points per generated series.
pub const SERIES_LEN: usize = 30;
/// Leading points that carry an `actual` value.
pub const HISTORY_LEN: usize = 15;

pub const ACTUAL_BASE: f64 = 50_000.0;
pub const ACTUAL_SPAN: f64 = 10_000.0;
pub const PREDICTED_BASE: f64 = 52_000.0;
pub const PREDICTED_SPAN: f64 = 12_000.0;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

impl RngSource<StdRng> {
    /// Unseeded source; values differ across runs.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible series.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

/// Generate a fresh series starting at `now`.
///
/// Point `i` is dated `now + i` UTC calendar days. For each point the `actual`
/// draw (history points only) is taken before the `predicted` draw.
///
/// A `now` within 29 days of `DateTime::<Utc>::MAX_UTC` is pulled back to the
/// latest start whose whole series is representable, so dates always advance
/// by exactly one day.
pub fn generate_series<R>(now: DateTime<Utc>, rng: &mut R) -> Vec<PredictiveDataPoint>
where
    R: RandomSource + ?Sized,
{
    let start = now.min(latest_start());
    let mut points = Vec::with_capacity(SERIES_LEN);

    for i in 0..SERIES_LEN {
        let date = start
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let actual = (i < HISTORY_LEN).then(|| ACTUAL_BASE + rng.next_unit() * ACTUAL_SPAN);
        let predicted = PREDICTED_BASE + rng.next_unit() * PREDICTED_SPAN;

        points.push(PredictiveDataPoint {
            date,
            actual,
            predicted,
        });
    }

    points
}

fn latest_start() -> DateTime<Utc> {
    DateTime::<Utc>::MAX_UTC
        .checked_sub_days(Days::new(SERIES_LEN as u64 - 1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Aggregate view of a series, used by text reports.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub n_points: usize,
    pub n_history: usize,
    pub predicted_min: f64,
    pub predicted_max: f64,
    pub predicted_mean: f64,
    pub actual_mean: Option<f64>,
}

impl SeriesSummary {
    pub fn from_points(points: &[PredictiveDataPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut predicted_min = f64::INFINITY;
        let mut predicted_max = f64::NEG_INFINITY;
        let mut predicted_sum = 0.0;
        let mut actual_sum = 0.0;
        let mut n_history = 0usize;

        for p in points {
            predicted_min = predicted_min.min(p.predicted);
            predicted_max = predicted_max.max(p.predicted);
            predicted_sum += p.predicted;
            if let Some(actual) = p.actual {
                actual_sum += actual;
                n_history += 1;
            }
        }

        Some(Self {
            n_points: points.len(),
            n_history,
            predicted_min,
            predicted_max,
            predicted_mean: predicted_sum / points.len() as f64,
            actual_mean: (n_history > 0).then(|| actual_sum / n_history as f64),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    /// Replays a fixed list of draws, cycling when exhausted.
    pub(crate) struct Scripted {
        values: Vec<f64>,
        pos: usize,
    }

    impl Scripted {
        pub(crate) fn new(values: Vec<f64>) -> Self {
            Self { values, pos: 0 }
        }

        pub(crate) fn draws(&self) -> usize {
            self.pos
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.pos % self.values.len()];
            self.pos += 1;
            v
        }
    }

    fn jan_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn history_prefix_and_forecast_horizon() {
        let points = generate_series(jan_first(), &mut RngSource::seeded(7));
        assert_eq!(points.len(), SERIES_LEN);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.actual.is_some(), i < HISTORY_LEN, "point {i}");
        }
    }

    #[test]
    fn values_stay_within_bounds() {
        let mut rng = RngSource::seeded(42);
        for _ in 0..50 {
            for p in generate_series(jan_first(), &mut rng) {
                assert!((52_000.0..64_000.0).contains(&p.predicted), "{}", p.predicted);
                if let Some(actual) = p.actual {
                    assert!((50_000.0..60_000.0).contains(&actual), "{actual}");
                }
            }
        }
    }

    #[test]
    fn extreme_draws_hit_exact_bounds() {
        let lows = generate_series(jan_first(), &mut Scripted::new(vec![0.0]));
        assert_eq!(lows[0].actual, Some(50_000.0));
        assert_eq!(lows[0].predicted, 52_000.0);

        let highs = generate_series(jan_first(), &mut Scripted::new(vec![0.5]));
        assert_eq!(highs[3].actual, Some(55_000.0));
        assert_eq!(highs[3].predicted, 58_000.0);
    }

    #[test]
    fn actual_is_drawn_before_predicted() {
        let mut rng = Scripted::new(vec![0.1, 0.9]);
        let points = generate_series(jan_first(), &mut rng);
        assert_eq!(points[0].actual, Some(51_000.0));
        assert!((points[0].predicted - 62_800.0).abs() < 1e-9);
        // 15 history points draw twice, 15 forecast points draw once.
        assert_eq!(rng.draws(), HISTORY_LEN * 2 + (SERIES_LEN - HISTORY_LEN));
    }

    #[test]
    fn dates_advance_one_calendar_day() {
        let points = generate_series(jan_first(), &mut RngSource::seeded(1));
        for w in points.windows(2) {
            assert_eq!(w[1].date - w[0].date, chrono::Duration::days(1));
        }
        assert_eq!(points[0].date.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(points[29].date.date_naive(), NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
    }

    #[test]
    fn start_near_chrono_max_still_advances_daily() {
        let points = generate_series(DateTime::<Utc>::MAX_UTC, &mut RngSource::seeded(1));
        assert_eq!(points.len(), SERIES_LEN);
        for w in points.windows(2) {
            assert_eq!(w[1].date - w[0].date, chrono::Duration::days(1));
        }
        assert_eq!(points[SERIES_LEN - 1].date, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn jan_first_scenario() {
        let points = generate_series(jan_first(), &mut RngSource::seeded(3));
        assert!(points[0].actual.is_some());
        assert!(points[20].actual.is_none());
        assert!(points[20].predicted.is_finite());
    }

    #[test]
    fn time_of_day_is_preserved_across_month_end() {
        let start = Utc.with_ymd_and_hms(2024, 2, 20, 13, 45, 0).unwrap();
        let points = generate_series(start, &mut RngSource::seeded(1));
        assert_eq!(points[9].date, Utc.with_ymd_and_hms(2024, 2, 29, 13, 45, 0).unwrap());
        assert_eq!(points[10].date, Utc.with_ymd_and_hms(2024, 3, 1, 13, 45, 0).unwrap());
    }

    #[test]
    fn repeated_calls_are_not_cached() {
        let mut rng = RngSource::from_entropy();
        let a = generate_series(jan_first(), &mut rng);
        let b = generate_series(jan_first(), &mut rng);

        let dates_a: Vec<_> = a.iter().map(|p| p.date).collect();
        let dates_b: Vec<_> = b.iter().map(|p| p.date).collect();
        assert_eq!(dates_a, dates_b);
        assert_ne!(a, b);
    }

    #[test]
    fn same_seed_reproduces_series() {
        let a = generate_series(jan_first(), &mut RngSource::seeded(99));
        let b = generate_series(jan_first(), &mut RngSource::seeded(99));
        assert_eq!(a, b);
    }

    #[test]
    fn summary_counts_history() {
        let points = generate_series(jan_first(), &mut Scripted::new(vec![0.5]));
        let summary = SeriesSummary::from_points(&points).unwrap();
        assert_eq!(summary.n_points, 30);
        assert_eq!(summary.n_history, 15);
        assert_eq!(summary.predicted_min, 58_000.0);
        assert_eq!(summary.predicted_max, 58_000.0);
        assert_eq!(summary.actual_mean, Some(55_000.0));
        assert!(SeriesSummary::from_points(&[]).is_none());
    }
}
