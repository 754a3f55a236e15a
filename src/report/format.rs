//! Formatted terminal output for the CLI commands.
//!
//! We keep formatting code in one place so:
//! - the routing/generation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use chrono::{DateTime, Utc};

use crate::data::SeriesSummary;
use crate::domain::{
    CostCategory, CostRecommendation, FlipCardSpec, Metric, PredictiveDataPoint, RiskMetric,
};
use crate::router::{ContentDescriptor, Panel};

/// `$125,000` style formatting (whole dollars, thousands separators).
pub fn fmt_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

/// Signed percent change, e.g. `+12.5%` / `-2.4%`.
pub fn fmt_change(change: f64) -> String {
    format!("{change:+.1}%")
}

/// Axis tick label for a series date ("Jan 5").
pub fn fmt_tick_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d").to_string()
}

/// Full date label ("Jan 5, 2024").
pub fn fmt_long_date(point: &PredictiveDataPoint) -> String {
    point.date.format("%b %-d, %Y").to_string()
}

/// Format a series as a table with a summary footer.
pub fn format_series_table(points: &[PredictiveDataPoint]) -> String {
    let mut out = String::new();

    out.push_str("=== Revenue Forecast ===\n");
    out.push_str(&format!("{:<14} {:>12} {:>12}\n", "date", "actual", "predicted"));
    for p in points {
        out.push_str(&format!(
            "{:<14} {:>12} {:>12}\n",
            fmt_long_date(p),
            p.actual.map(fmt_currency).unwrap_or_else(|| "-".to_string()),
            fmt_currency(p.predicted),
        ));
    }

    if let Some(summary) = SeriesSummary::from_points(points) {
        out.push('\n');
        out.push_str(&format!(
            "points={} history={} | predicted=[{}, {}] mean={}",
            summary.n_points,
            summary.n_history,
            fmt_currency(summary.predicted_min),
            fmt_currency(summary.predicted_max),
            fmt_currency(summary.predicted_mean),
        ));
        if let Some(actual_mean) = summary.actual_mean {
            out.push_str(&format!(" | actual mean={}", fmt_currency(actual_mean)));
        }
        out.push('\n');
    }

    out
}

/// Describe every panel of a content descriptor. Empty descriptors yield "".
pub fn format_content(content: &ContentDescriptor) -> String {
    let mut out = String::new();

    for panel in content.panels() {
        out.push_str(&format!("## {}\n", panel.kind().label()));
        match panel {
            Panel::MetricCards(metrics) => out.push_str(&format_metrics(metrics)),
            Panel::ForecastChart(points) => {
                if let Some(s) = SeriesSummary::from_points(points) {
                    out.push_str(&format!(
                        "{} points ({} with actuals), {} → {}, predicted mean {}\n",
                        s.n_points,
                        s.n_history,
                        points.first().map(fmt_long_date).unwrap_or_default(),
                        points.last().map(fmt_long_date).unwrap_or_default(),
                        fmt_currency(s.predicted_mean),
                    ));
                }
            }
            Panel::RiskAnalysis(risks) => out.push_str(&format_risks(risks)),
            Panel::Profitability {
                categories,
                recommendations,
            } => {
                out.push_str(&format_costs(categories));
                out.push_str(&format_recommendations(recommendations));
            }
            Panel::FileUpload => out.push_str("Click to upload: CSV, Excel, or JSON files\n"),
            Panel::PredictionOptions { selected } => {
                let label = selected.map(|p| p.label()).unwrap_or("none");
                out.push_str(&format!("selected: {label}\n"));
            }
            Panel::FlipCards(cards) => out.push_str(&format_flip_cards(cards)),
        }
        out.push('\n');
    }

    out
}

fn format_metrics(metrics: &[Metric]) -> String {
    let mut out = String::new();
    for m in metrics {
        out.push_str(&format!(
            "{} {:<12} {:>10} {:>7}\n",
            m.icon.glyph(),
            m.title,
            m.value,
            fmt_change(m.change)
        ));
    }
    out
}

fn format_risks(risks: &[RiskMetric]) -> String {
    let mut out = String::new();
    for r in risks {
        out.push_str(&format!(
            "{:<18} {:>3} ({})\n",
            r.category,
            r.value,
            r.status.label()
        ));
    }
    out
}

fn format_costs(categories: &[CostCategory]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>8} {:>10} {:>10} {:>6}\n",
        "category", "current", "previous", "change", "reduction", "projected", "eff"
    ));
    for c in categories {
        out.push_str(&format!(
            "{:<12} {:>10} {:>10} {:>8} {:>10} {:>10} {:>5.0}%\n",
            c.name,
            fmt_currency(c.current_cost),
            fmt_currency(c.previous_cost),
            fmt_change(c.change_pct()),
            fmt_currency(c.predicted_reduction),
            fmt_currency(c.projected_cost()),
            c.efficiency,
        ));
    }
    out
}

fn format_recommendations(recommendations: &[CostRecommendation]) -> String {
    let mut out = String::new();
    for r in recommendations {
        out.push_str(&format!(
            "* {} [{} impact] saves {}: {}\n",
            r.category,
            r.impact.label(),
            fmt_currency(r.potential_savings),
            r.description
        ));
        for item in r.action_items {
            out.push_str(&format!("    - {item}\n"));
        }
    }
    out
}

fn format_flip_cards(cards: &[FlipCardSpec]) -> String {
    let mut out = String::new();
    for c in cards {
        let badge = c
            .badge()
            .and(c.risk_percentage)
            .map(|p| format!(" ({p}% Risk)"))
            .unwrap_or_default();
        out.push_str(&format!("{} {}{badge}\n", c.icon.glyph(), c.title));
        out.push_str(&format!("    {}\n", c.front_content));
        if let Some(tip) = c.tip {
            out.push_str(&format!("    Tip: {tip}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::series::tests::Scripted;
    use crate::data::{RngSource, generate_series};
    use crate::domain::{NavSection, PredictionType};
    use crate::router::{ViewState, select_content, select_content_by_name};
    use chrono::{DateTime, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(fmt_currency(0.0), "$0");
        assert_eq!(fmt_currency(999.4), "$999");
        assert_eq!(fmt_currency(1000.0), "$1,000");
        assert_eq!(fmt_currency(125000.0), "$125,000");
        assert_eq!(fmt_currency(1234567.0), "$1,234,567");
        assert_eq!(fmt_currency(-1500.0), "-$1,500");
    }

    #[test]
    fn change_has_sign() {
        assert_eq!(fmt_change(12.5), "+12.5%");
        assert_eq!(fmt_change(-2.4), "-2.4%");
    }

    #[test]
    fn series_table_marks_forecast_rows() {
        let points = generate_series(now(), &mut Scripted::new(vec![0.5]));
        let table = format_series_table(&points);
        assert!(table.contains("Jan 1, 2024"));
        assert!(table.contains("Jan 30, 2024"));
        assert!(table.contains("history=15"));
        let last_row = table.lines().nth(31).unwrap();
        assert!(last_row.contains(" - "), "{last_row}");
    }

    #[test]
    fn tick_dates() {
        let points = generate_series(now(), &mut Scripted::new(vec![0.5]));
        assert_eq!(fmt_tick_date(points[4].date), "Jan 5");
        assert_eq!(fmt_long_date(&points[4]), "Jan 5, 2024");
    }

    #[test]
    fn empty_content_formats_to_nothing() {
        let content =
            select_content_by_name("bogus", &ViewState::default(), now(), &mut RngSource::seeded(1));
        assert_eq!(format_content(&content), "");
    }

    #[test]
    fn predictions_content_lists_cards() {
        let state = ViewState::default()
            .set_active_section(NavSection::Predictions)
            .set_selected_prediction(Some(PredictionType::Revenue));
        let text = format_content(&select_content(&state, now(), &mut RngSource::seeded(1)));
        assert!(text.contains("## prediction options"));
        assert!(text.contains("selected: Revenue Forecast"));
        assert!(text.contains("Risk Assessment (75% Risk)"));
        assert!(text.contains("## revenue forecast"));
    }

    #[test]
    fn dashboard_content_lists_metrics_and_costs() {
        let text =
            format_content(&select_content(&ViewState::default(), now(), &mut RngSource::seeded(1)));
        assert!(text.contains("$125,000"));
        assert!(text.contains("Market Volatility"));
        assert!(text.contains("Operations Optimization [high impact] saves $15,000"));
    }

    #[test]
    fn cost_table_shows_projected_cost() {
        let text = format_costs(crate::data::COST_CATEGORIES.as_slice());
        assert!(text.lines().next().unwrap().contains("projected"));
        let operations = text.lines().find(|l| l.starts_with("Operations")).unwrap();
        assert!(operations.contains("$47,000"), "{operations}");
    }

    #[test]
    fn zero_risk_card_has_no_badge() {
        let card = FlipCardSpec {
            title: "Calm Waters",
            front_content: "Nothing to report",
            back_content: "Still nothing",
            icon: crate::domain::Icon::AlertTriangle,
            risk_percentage: Some(0),
            tip: None,
        };
        let text = format_flip_cards(&[card]);
        assert!(text.starts_with(&format!("{} Calm Waters\n", card.icon.glyph())), "{text}");
        assert!(!text.contains("Risk"));
    }
}
