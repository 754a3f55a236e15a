//! Plotters-powered revenue forecast chart widget for Ratatui.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use chrono::{DateTime, Days, Utc};
use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::PredictiveDataPoint;
use crate::report::fmt_tick_date;

/// Series colours, shared with the legend drawn in the block title.
pub const ACTUAL_COLOR: Color = Color::Rgb(37, 99, 235);
pub const PREDICTED_COLOR: Color = Color::Rgb(22, 163, 74);

/// A render-only chart description. X is the day offset from `start`.
pub struct ForecastChart<'a> {
    pub actual: &'a [(f64, f64)],
    pub predicted: &'a [(f64, f64)],
    pub start: DateTime<Utc>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

/// Plot coordinates and padded bounds for a series.
pub struct ChartData {
    pub actual: Vec<(f64, f64)>,
    pub predicted: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl ChartData {
    pub fn from_points(points: &[PredictiveDataPoint]) -> Self {
        let actual: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.actual.map(|v| (i as f64, v)))
            .collect();
        let predicted: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.predicted))
            .collect();

        let x_max = (points.len().max(2) - 1) as f64;

        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for &(_, y) in actual.iter().chain(predicted.iter()) {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
            y_min = 0.0;
            y_max = 1.0;
        }
        let pad = ((y_max - y_min).abs() * 0.05).max(1e-9);

        Self {
            actual,
            predicted,
            x_bounds: [0.0, x_max],
            y_bounds: [y_min - pad, y_max + pad],
        }
    }
}

fn to_rgb(color: Color) -> RGBColor {
    match color {
        Color::Rgb(r, g, b) => RGBColor(r, g, b),
        _ => RGBColor(255, 255, 255),
    }
}

impl<'a> Widget for ForecastChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        // Plotters may fail to build a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let start = self.start;
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 2)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(6)
                .y_labels(5)
                .x_label_formatter(&|v| {
                    let offset = v.round().max(0.0) as u64;
                    start
                        .checked_add_days(Days::new(offset))
                        .map(fmt_tick_date)
                        .unwrap_or_default()
                })
                .y_label_formatter(&|v| format!("${:.0}k", v / 1000.0))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            let predicted_color = to_rgb(PREDICTED_COLOR);
            let actual_color = to_rgb(ACTUAL_COLOR);

            // Predicted (dashed) first so the observed history line stays on top.
            chart.draw_series(DashedLineSeries::new(
                self.predicted.iter().copied(),
                2,
                1,
                ShapeStyle::from(predicted_color),
            ))?;
            chart.draw_series(LineSeries::new(self.actual.iter().copied(), &actual_color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::series::tests::Scripted;
    use crate::data::generate_series;
    use chrono::TimeZone;

    #[test]
    fn chart_data_splits_history() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let points = generate_series(now, &mut Scripted::new(vec![0.0, 1.0]));
        let data = ChartData::from_points(&points);

        assert_eq!(data.actual.len(), 15);
        assert_eq!(data.predicted.len(), 30);
        assert_eq!(data.x_bounds, [0.0, 29.0]);
        assert!(data.y_bounds[0] < 50_000.0);
        assert!(data.y_bounds[1] > 52_000.0);
    }

    fn render_points(points: &[PredictiveDataPoint], area: Rect) -> Buffer {
        let data = ChartData::from_points(points);
        let mut buf = Buffer::empty(area);
        ForecastChart {
            actual: &data.actual,
            predicted: &data.predicted,
            start: points[0].date,
            x_bounds: data.x_bounds,
            y_bounds: data.y_bounds,
        }
        .render(area, &mut buf);
        buf
    }

    #[test]
    fn draws_both_series_in_their_colours() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let points = generate_series(now, &mut Scripted::new(vec![0.2, 0.8]));
        let buf = render_points(&points, Rect::new(0, 0, 80, 24));

        let has_fg = |c: Color| buf.content().iter().any(|cell| cell.fg == c);
        assert!(has_fg(ACTUAL_COLOR));
        assert!(has_fg(PREDICTED_COLOR));
    }

    #[test]
    fn zero_area_draws_nothing() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let points = generate_series(now, &mut Scripted::new(vec![0.5]));
        let buf = render_points(&points, Rect::new(0, 0, 0, 0));
        assert!(buf.content().is_empty());
    }

    #[test]
    fn empty_series_gets_unit_bounds() {
        let data = ChartData::from_points(&[]);
        assert!(data.actual.is_empty());
        assert_eq!(data.x_bounds, [0.0, 1.0]);
        assert!(data.y_bounds[1] > data.y_bounds[0]);
    }
}
