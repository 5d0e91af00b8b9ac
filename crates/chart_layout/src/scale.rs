//! Value axis scaling and tick generation

use crate::format::format_value;
use crate::layout::PlotDimensions;
use crate::model::{max_value, SeriesEntry};
use serde::{Deserialize, Serialize};

/// A horizontal grid line on the value axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub label: String,
    pub y: f64,
}

/// Round `max` up to an axis maximum that divides into `ticks` round steps.
///
/// Each step is 1, 2, 5 or 10 times a power of ten. A zero maximum yields a
/// unit step so that flat data still gets a visible axis.
pub fn nice_number(max: f64, ticks: u32) -> f64 {
    let ticks = f64::from(ticks.max(1));
    if max == 0.0 {
        return ticks;
    }

    let rough = max / ticks;
    let magnitude = 10_f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude * ticks
}

/// Grid lines from zero up to the nice maximum, `tick_count + 1` in all.
///
/// A tick count of zero is treated as one.
pub fn compute_grid_lines(
    series: &[SeriesEntry],
    dims: &PlotDimensions,
    tick_count: u32,
) -> Vec<GridLine> {
    let tick_count = tick_count.max(1);
    let nice_max = nice_number(max_value(series), tick_count);
    let step = nice_max / f64::from(tick_count);

    (0..=tick_count)
        .map(|i| {
            let value = f64::from(i) * step;
            GridLine {
                value,
                label: format_value(value),
                y: dims.baseline() - (value / nice_max) * dims.inner_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartKind;

    fn series(values: &[f64]) -> Vec<SeriesEntry> {
        values.iter().map(|&v| SeriesEntry::new("S", v, "#000")).collect()
    }

    #[test]
    fn test_nice_number() {
        assert_eq!(nice_number(100.0, 5), 100.0);
        assert_eq!(nice_number(30.0, 5), 50.0);
        assert_eq!(nice_number(20.0, 5), 25.0);
        assert_eq!(nice_number(70.0, 5), 100.0);
        assert_eq!(nice_number(42.0, 5), 50.0);
        assert_eq!(nice_number(1234.0, 4), 2000.0);
        assert_eq!(nice_number(0.0, 5), 5.0);
    }

    #[test]
    fn test_grid_lines() {
        let dims = PlotDimensions::compute(600.0, 320.0, ChartKind::Column);
        let lines = compute_grid_lines(&series(&[10.0, 42.0]), &dims, 5);

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].value, 0.0);
        assert_eq!(lines[0].y, 270.0);
        assert_eq!(lines[0].label, "0");
        assert_eq!(lines[5].value, 50.0);
        assert_eq!(lines[5].y, 20.0);
        assert_eq!(lines[1].label, "10");
    }

    #[test]
    fn test_grid_lines_all_zero() {
        let dims = PlotDimensions::compute(600.0, 320.0, ChartKind::Line);
        let lines = compute_grid_lines(&series(&[0.0, 0.0]), &dims, 4);

        let values: Vec<f64> = lines.iter().map(|l| l.value).collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_grid_labels_use_suffixes() {
        let dims = PlotDimensions::compute(600.0, 320.0, ChartKind::Line);
        let lines = compute_grid_lines(&series(&[4_000_000.0]), &dims, 4);
        assert_eq!(lines.last().unwrap().label, "4.0M");
        assert_eq!(lines[1].label, "1.0M");
    }

    #[test]
    fn test_zero_tick_count_treated_as_one() {
        let dims = PlotDimensions::compute(600.0, 320.0, ChartKind::Line);
        let lines = compute_grid_lines(&series(&[7.0]), &dims, 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].value, 10.0);
    }
}
