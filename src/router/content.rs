//! Mapping from view state to the panels a front-end should render.

use chrono::{DateTime, Utc};

use crate::data::{self, RandomSource, generate_series};
use crate::domain::{
    CostCategory, CostRecommendation, FlipCardSpec, Metric, NavSection, PredictionType,
    PredictiveDataPoint, RiskMetric,
};
use crate::router::ViewState;

/// One renderable block of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    MetricCards(&'static [Metric]),
    ForecastChart(Vec<PredictiveDataPoint>),
    RiskAnalysis(&'static [RiskMetric]),
    Profitability {
        categories: &'static [CostCategory],
        recommendations: &'static [CostRecommendation],
    },
    FileUpload,
    PredictionOptions {
        selected: Option<PredictionType>,
    },
    FlipCards(&'static [FlipCardSpec]),
}

/// Discriminant of a [`Panel`], handy for reports and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    MetricCards,
    ForecastChart,
    RiskAnalysis,
    Profitability,
    FileUpload,
    PredictionOptions,
    FlipCards,
}

impl PanelKind {
    pub fn label(self) -> &'static str {
        match self {
            PanelKind::MetricCards => "metric cards",
            PanelKind::ForecastChart => "revenue forecast",
            PanelKind::RiskAnalysis => "risk analysis",
            PanelKind::Profitability => "profitability optimization",
            PanelKind::FileUpload => "file upload",
            PanelKind::PredictionOptions => "prediction options",
            PanelKind::FlipCards => "insight cards",
        }
    }
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        match self {
            Panel::MetricCards(_) => PanelKind::MetricCards,
            Panel::ForecastChart(_) => PanelKind::ForecastChart,
            Panel::RiskAnalysis(_) => PanelKind::RiskAnalysis,
            Panel::Profitability { .. } => PanelKind::Profitability,
            Panel::FileUpload => PanelKind::FileUpload,
            Panel::PredictionOptions { .. } => PanelKind::PredictionOptions,
            Panel::FlipCards(_) => PanelKind::FlipCards,
        }
    }
}

/// The ordered set of panels for one view state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentDescriptor {
    panels: Vec<Panel>,
}

impl ContentDescriptor {
    /// Renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel_kinds(&self) -> Vec<PanelKind> {
        self.panels.iter().map(Panel::kind).collect()
    }

    /// First forecast series in the descriptor, if any.
    pub fn series(&self) -> Option<&[PredictiveDataPoint]> {
        self.panels.iter().find_map(|p| match p {
            Panel::ForecastChart(points) => Some(points.as_slice()),
            _ => None,
        })
    }
}

/// Select the panels for `state`.
///
/// Forecast series are generated on every call; nothing is memoized.
pub fn select_content<R>(state: &ViewState, now: DateTime<Utc>, rng: &mut R) -> ContentDescriptor
where
    R: RandomSource + ?Sized,
{
    let panels = match state.active_section {
        NavSection::Dashboard => vec![
            Panel::MetricCards(&data::METRICS),
            Panel::ForecastChart(generate_series(now, rng)),
            Panel::RiskAnalysis(&data::RISKS),
            Panel::Profitability {
                categories: &data::COST_CATEGORIES,
                recommendations: &data::RECOMMENDATIONS,
            },
        ],
        NavSection::Predictions => {
            let mut panels = vec![
                Panel::FileUpload,
                Panel::PredictionOptions {
                    selected: state.selected_prediction,
                },
            ];
            if state.selected_prediction.is_some() {
                panels.push(Panel::ForecastChart(generate_series(now, rng)));
                panels.push(Panel::FlipCards(&data::FLIP_CARDS));
            }
            panels
        }
        NavSection::Analytics | NavSection::Settings => vec![Panel::FileUpload],
    };

    ContentDescriptor { panels }
}

/// Select content for a section given by name.
///
/// An unrecognized name yields [`ContentDescriptor::empty`]; the other fields of
/// `state` are ignored in that case.
pub fn select_content_by_name<R>(
    name: &str,
    state: &ViewState,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ContentDescriptor
where
    R: RandomSource + ?Sized,
{
    match NavSection::from_name(name) {
        Some(section) => select_content(&state.set_active_section(section), now, rng),
        None => {
            tracing::debug!(section = name, "unrecognized section, rendering nothing");
            ContentDescriptor::empty()
        }
    }
}
