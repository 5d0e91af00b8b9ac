//! Per-kind geometry builders
//!
//! Each builder maps a series and a plot area to drawing records for one chart
//! kind. All-zero data lays out flat instead of dividing by zero.

use crate::layout::PlotDimensions;
use crate::model::{max_value, SeriesEntry};
use crate::path::{build_arc_path, polar};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Radial offset of the exploded slice path when none is given
pub const DEFAULT_EXPLODE_OFFSET: f64 = 10.0;
/// Explode offset used by [`PieGeometry::for_canvas`]
pub const HOVER_EXPLODE_OFFSET: f64 = 12.0;
/// Gap kept between the pie and the canvas edge
pub const PIE_CANVAS_PADDING: f64 = 20.0;
/// Inner radius of a donut as a fraction of the outer radius
pub const DONUT_HOLE_RATIO: f64 = 0.5;

/// Share of the inner width left empty between and around bars
const BAR_PADDING_RATIO: f64 = 0.3;
/// Distance from a bar's top to its value label
const BAR_LABEL_OFFSET: f64 = 6.0;
/// Label radius of a solid pie, as a fraction of the outer radius
const PIE_LABEL_RATIO: f64 = 0.65;

/// A line-chart vertex with its source data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub name: String,
    pub color: String,
    pub index: usize,
}

/// A column-chart bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarData {
    pub name: String,
    pub value: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal center of the bar
    pub label_x: f64,
    /// Just above the bar's top edge
    pub label_y: f64,
    pub index: usize,
}

/// A pie or donut slice with its resting and exploded outlines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
    /// Share of the total, 0..=100
    pub percentage: f64,
    /// Radians, clockwise from 3 o'clock
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path `d` for the slice at rest
    pub path_d: String,
    /// SVG path `d` for the slice pushed out along its mid-angle
    pub exploded_path_d: String,
    pub label_x: f64,
    pub label_y: f64,
    pub index: usize,
}

/// Circle the slices are laid out on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Zero for a solid pie
    pub inner_radius: f64,
    pub explode_offset: f64,
}

impl PieGeometry {
    /// Solid pie with the default explode offset
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            inner_radius: 0.0,
            explode_offset: DEFAULT_EXPLODE_OFFSET,
        }
    }

    /// Pie centered on a canvas, inset by the canvas padding
    pub fn for_canvas(width: f64, height: f64, donut: bool) -> Self {
        let radius = width.min(height) / 2.0 - PIE_CANVAS_PADDING;
        let inner_radius = if donut { radius * DONUT_HOLE_RATIO } else { 0.0 };
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius,
            inner_radius,
            explode_offset: HOVER_EXPLODE_OFFSET,
        }
    }

    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    pub fn with_explode_offset(mut self, explode_offset: f64) -> Self {
        self.explode_offset = explode_offset;
        self
    }

    pub fn is_donut(&self) -> bool {
        self.inner_radius > 0.0
    }

    /// Radius at which slice labels are anchored
    pub fn label_radius(&self) -> f64 {
        if self.is_donut() {
            (self.radius + self.inner_radius) / 2.0
        } else {
            self.radius * PIE_LABEL_RATIO
        }
    }
}

/// Largest value, or 1 when nothing is above zero
fn safe_max(series: &[SeriesEntry]) -> f64 {
    let max = max_value(series);
    if max == 0.0 {
        1.0
    } else {
        max
    }
}

/// Vertices for a line chart, one per entry in input order.
///
/// The first point sits on the left edge of the plot area and the last on
/// the right edge; a lone point is centered.
pub fn compute_line_points(series: &[SeriesEntry], dims: &PlotDimensions) -> Vec<ChartPoint> {
    let max = safe_max(series);
    let count = series.len();

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let x = if count == 1 {
                dims.margin_left + dims.inner_width / 2.0
            } else {
                dims.margin_left + (index as f64 / (count - 1) as f64) * dims.inner_width
            };
            let y = dims.baseline() - (entry.value / max) * dims.inner_height;
            ChartPoint {
                x,
                y,
                value: entry.value,
                name: entry.name.clone(),
                color: entry.color.clone(),
                index,
            }
        })
        .collect()
}

/// Bars for a column chart.
///
/// A fixed share of the inner width is split into equal gaps before, between
/// and after the bars; the rest is divided evenly among the bars.
pub fn compute_bar_data(series: &[SeriesEntry], dims: &PlotDimensions) -> Vec<BarData> {
    if series.is_empty() {
        return Vec::new();
    }

    let max = safe_max(series);
    let count = series.len() as f64;
    let total_padding = dims.inner_width * BAR_PADDING_RATIO;
    let bar_width = (dims.inner_width - total_padding) / count;
    let gap = total_padding / (count + 1.0);

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let height = (entry.value / max) * dims.inner_height;
            let x = dims.margin_left + gap + index as f64 * (bar_width + gap);
            let y = dims.baseline() - height;
            BarData {
                name: entry.name.clone(),
                value: entry.value,
                color: entry.color.clone(),
                x,
                y,
                width: bar_width,
                height,
                label_x: x + bar_width / 2.0,
                label_y: y - BAR_LABEL_OFFSET,
                index,
            }
        })
        .collect()
}

/// Slices for a pie or donut chart, starting at 12 o'clock and running
/// clockwise.
///
/// A zero total produces no slices rather than a degenerate full circle.
pub fn compute_pie_slices(series: &[SeriesEntry], geometry: &PieGeometry) -> Vec<PieSlice> {
    let total: f64 = series.iter().map(|s| s.value).sum();
    if total == 0.0 {
        return Vec::new();
    }

    let PieGeometry {
        cx,
        cy,
        radius,
        inner_radius,
        explode_offset,
    } = *geometry;
    let label_radius = geometry.label_radius();
    let mut current_angle = -FRAC_PI_2;

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let share = entry.value / total;
            let start_angle = current_angle;
            let end_angle = current_angle + share * 2.0 * PI;
            current_angle = end_angle;

            let mid_angle = (start_angle + end_angle) / 2.0;
            let (ex, ey) = polar(cx, cy, explode_offset, mid_angle);
            let (label_x, label_y) = polar(cx, cy, label_radius, mid_angle);

            PieSlice {
                name: entry.name.clone(),
                value: entry.value,
                color: entry.color.clone(),
                percentage: share * 100.0,
                start_angle,
                end_angle,
                path_d: build_arc_path(cx, cy, radius, inner_radius, start_angle, end_angle),
                exploded_path_d: build_arc_path(
                    ex,
                    ey,
                    radius,
                    inner_radius,
                    start_angle,
                    end_angle,
                ),
                label_x,
                label_y,
                index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartKind;

    fn dims() -> PlotDimensions {
        PlotDimensions::compute(600.0, 320.0, ChartKind::Line)
    }

    fn series(values: &[f64]) -> Vec<SeriesEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| SeriesEntry::new(format!("S{}", i), v, "#f00"))
            .collect()
    }

    #[test]
    fn test_line_points_positions() {
        let dims = dims();
        let points = compute_line_points(&series(&[10.0, 20.0, 30.0]), &dims);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, 60.0);
        assert_eq!(points[1].x, 60.0 + 255.0);
        assert_eq!(points[2].x, 570.0);
        assert_eq!(points[2].y, 20.0);
        assert_eq!(points[1].index, 1);
        assert_eq!(points[1].name, "S1");
    }

    #[test]
    fn test_line_single_point_centered() {
        let dims = dims();
        let points = compute_line_points(&series(&[5.0]), &dims);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 60.0 + 255.0);
        assert_eq!(points[0].y, 20.0);
    }

    #[test]
    fn test_line_points_all_zero_on_baseline() {
        let dims = dims();
        let points = compute_line_points(&series(&[0.0, 0.0]), &dims);
        assert!(points.iter().all(|p| p.y == dims.baseline()));
        assert!(compute_line_points(&[], &dims).is_empty());
    }

    #[test]
    fn test_bar_layout() {
        let dims = dims();
        let bars = compute_bar_data(&series(&[50.0, 100.0]), &dims);

        let total_padding = 510.0 * 0.3;
        let gap = total_padding / 3.0;
        let width = (510.0 - total_padding) / 2.0;

        assert_eq!(bars.len(), 2);
        assert!((bars[0].x - (60.0 + gap)).abs() < 1e-9);
        assert!((bars[1].x - (60.0 + gap + width + gap)).abs() < 1e-9);
        assert!((bars[0].width - width).abs() < 1e-9);
        assert_eq!(bars[1].height, 250.0);
        assert_eq!(bars[1].y, 20.0);
        assert_eq!(bars[0].height, 125.0);
        assert_eq!(bars[0].label_y, bars[0].y - 6.0);
        assert!((bars[0].label_x - (bars[0].x + width / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_bars_all_zero_are_flat() {
        let dims = dims();
        let bars = compute_bar_data(&series(&[0.0, 0.0, 0.0]), &dims);
        assert_eq!(bars.len(), 3);
        assert!(bars.iter().all(|b| b.height == 0.0 && b.y == dims.baseline()));
        assert!(compute_bar_data(&[], &dims).is_empty());
    }

    #[test]
    fn test_pie_slices_angles_and_percentages() {
        let geometry = PieGeometry::new(200.0, 160.0, 100.0);
        let slices = compute_pie_slices(&series(&[25.0, 50.0, 25.0]), &geometry);

        assert_eq!(slices.len(), 3);
        assert!((slices[0].start_angle + FRAC_PI_2).abs() < 1e-12);
        assert!((slices[0].end_angle - 0.0).abs() < 1e-12);
        assert!((slices[1].percentage - 50.0).abs() < 1e-9);
        assert!((slices[2].end_angle - 3.0 * FRAC_PI_2).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn test_pie_zero_total_is_empty() {
        let geometry = PieGeometry::new(0.0, 0.0, 10.0);
        assert!(compute_pie_slices(&series(&[0.0, 0.0]), &geometry).is_empty());
        assert!(compute_pie_slices(&[], &geometry).is_empty());
    }

    #[test]
    fn test_pie_label_positions() {
        let solid = PieGeometry::new(0.0, 0.0, 100.0);
        let slices = compute_pie_slices(&series(&[1.0, 1.0]), &solid);
        // first slice covers 12 to 6 o'clock through 3 o'clock, mid-angle 0
        assert!((slices[0].label_x - 65.0).abs() < 1e-9);
        assert!(slices[0].label_y.abs() < 1e-9);

        let donut = solid.with_inner_radius(50.0);
        let slices = compute_pie_slices(&series(&[1.0, 1.0]), &donut);
        assert!((slices[0].label_x - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_exploded_path_shifts_center() {
        let geometry = PieGeometry::new(0.0, 0.0, 100.0).with_explode_offset(10.0);
        let slices = compute_pie_slices(&series(&[1.0, 1.0]), &geometry);

        assert!(slices[0].path_d.starts_with("M 0 0 "));
        assert!(slices[0].exploded_path_d.starts_with("M 10 0 "));
        assert_ne!(slices[1].path_d, slices[1].exploded_path_d);
    }

    #[test]
    fn test_single_slice_uses_large_arc() {
        let geometry = PieGeometry::new(0.0, 0.0, 100.0);
        let slices = compute_pie_slices(&series(&[42.0]), &geometry);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].percentage, 100.0);
        assert!(slices[0].path_d.contains("A 100 100 0 1 1 "));
    }

    #[test]
    fn test_pie_geometry_for_canvas() {
        let solid = PieGeometry::for_canvas(400.0, 320.0, false);
        assert_eq!(solid.cx, 200.0);
        assert_eq!(solid.cy, 160.0);
        assert_eq!(solid.radius, 140.0);
        assert_eq!(solid.inner_radius, 0.0);
        assert_eq!(solid.explode_offset, HOVER_EXPLODE_OFFSET);
        assert!(!solid.is_donut());

        let donut = PieGeometry::for_canvas(400.0, 320.0, true);
        assert_eq!(donut.inner_radius, 70.0);
        assert!(donut.is_donut());
    }
}
