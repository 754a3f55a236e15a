//! Shared domain types.
//!
//! The enums and the series point are serializable so the CLI can emit them as
//! JSON. The static reference records borrow `&'static str` and are only ever
//! serialized, never parsed back.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Top-level view selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    #[default]
    Dashboard,
    Predictions,
    Analytics,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Dashboard,
        NavSection::Predictions,
        NavSection::Analytics,
        NavSection::Settings,
    ];

    /// Resolve a section from its lowercase name.
    ///
    /// Returns `None` for anything outside the enumerated set; callers decide
    /// what an unrecognized section means (the router renders nothing).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            NavSection::Dashboard => "dashboard",
            NavSection::Predictions => "predictions",
            NavSection::Analytics => "analytics",
            NavSection::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Predictions => "Predictions",
            NavSection::Analytics => "Analytics",
            NavSection::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            NavSection::Dashboard => 0,
            NavSection::Predictions => 1,
            NavSection::Analytics => 2,
            NavSection::Settings => 3,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Forecasting mode chosen in the predictions view.
///
/// "Unset" is represented as `Option::<PredictionType>::None` by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PredictionType {
    Revenue,
    Demand,
    Risk,
    Cost,
}

impl PredictionType {
    pub const ALL: [PredictionType; 4] = [
        PredictionType::Revenue,
        PredictionType::Demand,
        PredictionType::Risk,
        PredictionType::Cost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PredictionType::Revenue => "Revenue Forecast",
            PredictionType::Demand => "Demand Prediction",
            PredictionType::Risk => "Risk Assessment",
            PredictionType::Cost => "Cost Optimization",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PredictionType::Revenue => "Project revenue over the next 30 days",
            PredictionType::Demand => "Anticipate market demand from historical trends",
            PredictionType::Risk => "Score exposure across risk categories",
            PredictionType::Cost => "Find savings in operating cost categories",
        }
    }
}

/// One day's actual/predicted revenue pair in the synthetic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveDataPoint {
    pub date: DateTime<Utc>,
    /// Only present for the observed-history prefix of a series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    pub predicted: f64,
}

/// Icons referenced by the static datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    DollarSign,
    Users,
    AlertTriangle,
    TrendingUp,
    LineChart,
    BarChart2,
    Upload,
}

impl Icon {
    /// Single-cell glyph for terminal rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::DollarSign => "$",
            Icon::Users => "◉",
            Icon::AlertTriangle => "▲",
            Icon::TrendingUp => "↗",
            Icon::LineChart => "∿",
            Icon::BarChart2 => "▥",
            Icon::Upload => "⇪",
        }
    }
}

/// A headline KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    /// Percent change versus the previous period.
    pub change: f64,
    pub icon: Icon,
}

impl Metric {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskStatus {
    Low,
    Medium,
    High,
}

impl RiskStatus {
    pub fn label(self) -> &'static str {
        match self {
            RiskStatus::Low => "low",
            RiskStatus::Medium => "medium",
            RiskStatus::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskMetric {
    pub category: &'static str,
    /// Score in 0..=100.
    pub value: u8,
    pub status: RiskStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostCategory {
    pub name: &'static str,
    pub current_cost: f64,
    pub previous_cost: f64,
    pub predicted_reduction: f64,
    /// Efficiency score in percent.
    pub efficiency: f64,
}

impl CostCategory {
    /// Period-over-period change in percent (positive means costs grew).
    pub fn change_pct(&self) -> f64 {
        if self.previous_cost == 0.0 {
            return 0.0;
        }
        (self.current_cost - self.previous_cost) / self.previous_cost * 100.0
    }

    pub fn projected_cost(&self) -> f64 {
        self.current_cost - self.predicted_reduction
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn label(self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostRecommendation {
    pub category: &'static str,
    pub impact: Impact,
    pub potential_savings: f64,
    pub description: &'static str,
    pub action_items: &'static [&'static str],
}

/// A two-sided insight card; the back is shown once the card is flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlipCardSpec {
    pub title: &'static str,
    pub front_content: &'static str,
    pub back_content: &'static str,
    pub icon: Icon,
    pub risk_percentage: Option<u8>,
    pub tip: Option<&'static str>,
}

impl FlipCardSpec {
    /// Badge to show on the front face, if any.
    ///
    /// A missing or zero percentage shows no badge.
    pub fn badge(&self) -> Option<RiskBadge> {
        match self.risk_percentage {
            Some(p) if p > 0 => Some(RiskBadge::from_percentage(p)),
            _ => None,
        }
    }
}

/// Colour band for a risk percentage badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBadge {
    Low,
    Medium,
    High,
}

impl RiskBadge {
    pub fn from_percentage(pct: u8) -> Self {
        if pct > 70 {
            RiskBadge::High
        } else if pct > 30 {
            RiskBadge::Medium
        } else {
            RiskBadge::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_round_trip() {
        for section in NavSection::ALL {
            assert_eq!(NavSection::from_name(section.name()), Some(section));
        }
        assert_eq!(NavSection::from_name(" Analytics "), Some(NavSection::Analytics));
        assert_eq!(NavSection::from_name("reports"), None);
        assert_eq!(NavSection::from_name(""), None);
    }

    #[test]
    fn section_cycling_wraps() {
        assert_eq!(NavSection::Settings.next(), NavSection::Dashboard);
        assert_eq!(NavSection::Dashboard.prev(), NavSection::Settings);
        assert_eq!(NavSection::Dashboard.next(), NavSection::Predictions);
    }

    #[test]
    fn default_section_is_dashboard() {
        assert_eq!(NavSection::default(), NavSection::Dashboard);
    }

    #[test]
    fn risk_badge_thresholds() {
        assert_eq!(RiskBadge::from_percentage(75), RiskBadge::High);
        assert_eq!(RiskBadge::from_percentage(70), RiskBadge::Medium);
        assert_eq!(RiskBadge::from_percentage(31), RiskBadge::Medium);
        assert_eq!(RiskBadge::from_percentage(30), RiskBadge::Low);
    }

    #[test]
    fn zero_risk_percentage_hides_badge() {
        let card = FlipCardSpec {
            title: "t",
            front_content: "f",
            back_content: "b",
            icon: Icon::LineChart,
            risk_percentage: Some(0),
            tip: None,
        };
        assert_eq!(card.badge(), None);
    }

    #[test]
    fn cost_category_change() {
        let c = CostCategory {
            name: "Operations",
            current_cost: 50000.0,
            previous_cost: 55000.0,
            predicted_reduction: 3000.0,
            efficiency: 92.0,
        };
        assert!((c.change_pct() - (-9.0909)).abs() < 1e-3);
        assert_eq!(c.projected_cost(), 47000.0);
    }

    #[test]
    fn data_point_omits_absent_actual() {
        let p = PredictiveDataPoint {
            date: "2024-01-01T00:00:00Z".parse().unwrap(),
            actual: None,
            predicted: 55000.0,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"date":"2024-01-01T00:00:00Z","predicted":55000.0}"#);
    }
}
