//! Chart model types
//!
//! This module defines the configuration records a host hands to the engine:
//! the chart kind, the series entries, and the raw and normalized option sets.

use crate::error::{ChartError, ChartResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of charts supported
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart with a smoothed curve and filled area
    Line,
    /// Column chart (vertical bars)
    Column,
    /// Pie or donut chart
    Pie,
}

impl ChartKind {
    /// All supported kinds, in documentation order
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Column, ChartKind::Pie];

    /// The lowercase name used in configuration documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Column => "column",
            ChartKind::Pie => "pie",
        }
    }

    /// Whether this kind is drawn against a value axis
    pub fn has_axes(&self) -> bool {
        !matches!(self, ChartKind::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ChartError::InvalidChartType(s.to_string()))
    }
}

/// A single named, colored value to be plotted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesEntry {
    /// Display name (legend and tooltip text)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// The plotted magnitude; expected to be non-negative
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
    /// CSS color string; expected to be non-empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

impl SeriesEntry {
    /// Create a new series entry
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Tick counts arrive as JSON numbers, so `5.0` is as good as `5`
fn tick_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) => {
            Ok(Some(n as u32))
        }
        Some(n) => Err(D::Error::custom(format!(
            "invalid tick count {n}, expected a non-negative integer"
        ))),
    }
}

/// Raw chart configuration as supplied by the caller.
///
/// Every field is tolerant of absence so that a half-edited document still
/// deserializes and can be reported on by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Chart kind as written in the document (`line`, `column`, `pie`)
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub chart_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Ordered series entries
    #[serde(default, deserialize_with = "null_as_default")]
    pub series: Vec<SeriesEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_legend: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tooltips: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    /// Cut a hole in a pie chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donut: Option<bool>,
    /// Number of Y-axis intervals
    #[serde(
        default,
        deserialize_with = "tick_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub y_axis_ticks: Option<u32>,
    /// Canvas height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl ChartConfig {
    /// Create a new configuration with the given kind and title
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            chart_type: kind.as_str().to_string(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse a configuration document
    pub fn from_json(json: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a series entry
    pub fn with_series(mut self, entry: SeriesEntry) -> Self {
        self.series.push(entry);
        self
    }

    /// Enable or disable the donut hole
    pub fn with_donut(mut self, donut: bool) -> Self {
        self.donut = Some(donut);
        self
    }

    /// Set the number of Y-axis ticks
    pub fn with_y_axis_ticks(mut self, ticks: u32) -> Self {
        self.y_axis_ticks = Some(ticks);
        self
    }
}

/// A fully specified configuration, produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub title: String,
    pub series: Vec<SeriesEntry>,
    pub show_legend: bool,
    pub animated: bool,
    pub show_tooltips: bool,
    pub show_grid: bool,
    pub donut: bool,
    pub y_axis_ticks: u32,
    pub height: f64,
}

impl ChartOptions {
    /// Sum of all series values
    pub fn total(&self) -> f64 {
        self.series.iter().map(|s| s.value).sum()
    }
}

/// Largest series value, floored at zero
pub(crate) fn max_value(series: &[SeriesEntry]) -> f64 {
    series.iter().map(|s| s.value).fold(0.0, f64::max)
}
