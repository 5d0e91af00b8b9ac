//! Option defaults and normalization
//!
//! Normalization is a shallow merge: every option the caller set wins, every
//! option left out is taken from [`ChartDefaults`].

use crate::error::{ChartResult, ValidationError};
use crate::model::{ChartConfig, ChartKind, ChartOptions};
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Defaults applied to options a configuration leaves unset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartDefaults {
    pub show_legend: bool,
    pub animated: bool,
    pub show_tooltips: bool,
    pub show_grid: bool,
    pub donut: bool,
    pub y_axis_ticks: u32,
    pub height: f64,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            show_legend: true,
            animated: true,
            show_tooltips: true,
            show_grid: true,
            donut: false,
            y_axis_ticks: 5,
            height: 320.0,
        }
    }
}

impl ChartDefaults {
    /// Parse a (possibly partial) defaults document
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a defaults document, falling back to the built-in defaults
    /// when it cannot be read
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(defaults) => defaults,
            Err(e) => {
                tracing::warn!("Failed to parse chart defaults, using built-in defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// Merge a configuration over the built-in defaults
pub fn normalize(config: &ChartConfig) -> ChartResult<ChartOptions> {
    normalize_with(config, &ChartDefaults::default())
}

/// Merge a configuration over the given defaults.
///
/// Fails only when the chart type is not recognized, which validation
/// already reports.
pub fn normalize_with(config: &ChartConfig, defaults: &ChartDefaults) -> ChartResult<ChartOptions> {
    let kind: ChartKind = config.chart_type.parse()?;

    let options = ChartOptions {
        kind,
        title: config.title.clone(),
        series: config.series.clone(),
        show_legend: config.show_legend.unwrap_or(defaults.show_legend),
        animated: config.animated.unwrap_or(defaults.animated),
        show_tooltips: config.show_tooltips.unwrap_or(defaults.show_tooltips),
        show_grid: config.show_grid.unwrap_or(defaults.show_grid),
        donut: config.donut.unwrap_or(defaults.donut),
        y_axis_ticks: config.y_axis_ticks.unwrap_or(defaults.y_axis_ticks),
        height: config.height.unwrap_or(defaults.height),
    };

    tracing::debug!(
        kind = %options.kind,
        series = options.series.len(),
        "normalized chart options"
    );
    Ok(options)
}

/// Validate and normalize in one step.
///
/// Returns the full error list when the configuration is not admissible.
pub fn prepare(
    config: Option<&ChartConfig>,
    defaults: &ChartDefaults,
) -> Result<ChartOptions, Vec<ValidationError>> {
    let errors = validate(config);
    let config = match config {
        Some(config) if errors.is_empty() => config,
        _ => {
            tracing::warn!(count = errors.len(), "chart configuration failed validation");
            return Err(errors);
        }
    };

    normalize_with(config, defaults)
        .map_err(|_| vec![ValidationError::InvalidChartType(config.chart_type.clone())])
}

/// Drop the series at the given positions, e.g. entries toggled off in a legend.
///
/// Returns a new set of options; the input is left untouched.
pub fn filter_hidden_series(options: &ChartOptions, hidden: &BTreeSet<usize>) -> ChartOptions {
    let series = options
        .series
        .iter()
        .enumerate()
        .filter(|(index, _)| !hidden.contains(index))
        .map(|(_, entry)| entry.clone())
        .collect();

    ChartOptions {
        series,
        ..options.clone()
    }
}
