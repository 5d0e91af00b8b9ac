//! Chart layout calculations
//!
//! This module computes the plot area inside the canvas margins and composes
//! the per-kind builders into a complete layout for a normalized chart.

use crate::geometry::*;
use crate::model::*;
use crate::path::{build_area_path, build_polyline_points, build_smooth_path};
use crate::scale::{compute_grid_lines, GridLine};
use serde::{Deserialize, Serialize};

/// Uniform margin around a pie chart
const PIE_MARGIN: f64 = 20.0;
/// Axis chart margins: top, right, bottom, left
const AXIS_MARGINS: (f64, f64, f64, f64) = (20.0, 30.0, 50.0, 60.0);

/// Canvas size, margins, and the inner drawing rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotDimensions {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl PlotDimensions {
    /// Compute the plot area for a canvas.
    ///
    /// Sizes are not checked: a canvas smaller than its margins yields a
    /// negative inner size, which callers must avoid.
    pub fn compute(width: f64, height: f64, kind: ChartKind) -> Self {
        let (margin_top, margin_right, margin_bottom, margin_left) = if kind.has_axes() {
            AXIS_MARGINS
        } else {
            (PIE_MARGIN, PIE_MARGIN, PIE_MARGIN, PIE_MARGIN)
        };

        Self {
            width,
            height,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            inner_width: width - margin_left - margin_right,
            inner_height: height - margin_top - margin_bottom,
        }
    }

    /// Y coordinate of the zero line (bottom of the inner area)
    pub fn baseline(&self) -> f64 {
        self.margin_top + self.inner_height
    }
}

/// Identifiers for SVG `<defs>` entries (gradients, filters).
///
/// The instance id is chosen by the caller so that several charts on one page
/// do not collide, and so the same input always yields the same output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionIds {
    pub instance_id: String,
}

impl DefinitionIds {
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
        }
    }

    /// Fill gradient for the bar at `index`
    pub fn bar_gradient(&self, index: usize) -> String {
        format!("bar-grad-{}-{}", index, self.instance_id)
    }

    /// Fill gradient for the area under the line
    pub fn area_gradient(&self, index: usize) -> String {
        format!("area-grad-{}-{}", index, self.instance_id)
    }

    /// Drop-shadow filter for the slice at `index`
    pub fn slice_shadow(&self, index: usize) -> String {
        format!("slice-shadow-{}-{}", index, self.instance_id)
    }
}

/// Complete geometry for one chart, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartLayout {
    /// Line chart
    #[serde(rename_all = "camelCase")]
    Line {
        dimensions: PlotDimensions,
        points: Vec<ChartPoint>,
        /// Smoothed curve through the points
        line_path: String,
        /// Filled region under the curve
        area_path: String,
        /// Straight-segment `points` attribute
        polyline: String,
        /// Empty when the grid is switched off
        grid_lines: Vec<GridLine>,
        ids: DefinitionIds,
    },
    /// Column chart
    #[serde(rename_all = "camelCase")]
    Column {
        dimensions: PlotDimensions,
        bars: Vec<BarData>,
        grid_lines: Vec<GridLine>,
        ids: DefinitionIds,
    },
    /// Pie or donut chart
    #[serde(rename_all = "camelCase")]
    Pie {
        geometry: PieGeometry,
        slices: Vec<PieSlice>,
        /// Sum of all values, shown in a donut's center
        total: f64,
        ids: DefinitionIds,
    },
}

impl ChartLayout {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartLayout::Line { .. } => ChartKind::Line,
            ChartLayout::Column { .. } => ChartKind::Column,
            ChartLayout::Pie { .. } => ChartKind::Pie,
        }
    }

    pub fn ids(&self) -> &DefinitionIds {
        match self {
            ChartLayout::Line { ids, .. }
            | ChartLayout::Column { ids, .. }
            | ChartLayout::Pie { ids, .. } => ids,
        }
    }
}

/// Lay out a normalized chart on a canvas of the given width.
///
/// The canvas height comes from the options. Only call this with options
/// that passed validation.
pub fn compute_layout(options: &ChartOptions, width: f64, instance_id: &str) -> ChartLayout {
    let height = options.height;
    let ids = DefinitionIds::new(instance_id);
    tracing::debug!(kind = %options.kind, width, height, instance_id, "computing chart layout");

    let grid_lines = |dims: &PlotDimensions| {
        if options.show_grid {
            compute_grid_lines(&options.series, dims, options.y_axis_ticks)
        } else {
            Vec::new()
        }
    };

    match options.kind {
        ChartKind::Line => {
            let dimensions = PlotDimensions::compute(width, height, ChartKind::Line);
            let points = compute_line_points(&options.series, &dimensions);
            ChartLayout::Line {
                line_path: build_smooth_path(&points),
                area_path: build_area_path(&points, dimensions.baseline()),
                polyline: build_polyline_points(&points),
                grid_lines: grid_lines(&dimensions),
                dimensions,
                points,
                ids,
            }
        }
        ChartKind::Column => {
            let dimensions = PlotDimensions::compute(width, height, ChartKind::Column);
            ChartLayout::Column {
                bars: compute_bar_data(&options.series, &dimensions),
                grid_lines: grid_lines(&dimensions),
                dimensions,
                ids,
            }
        }
        ChartKind::Pie => {
            let geometry = PieGeometry::for_canvas(width, height, options.donut);
            ChartLayout::Pie {
                slices: compute_pie_slices(&options.series, &geometry),
                total: options.total(),
                geometry,
                ids,
            }
        }
    }
}
