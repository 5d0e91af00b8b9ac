//! Error types for the chart layout crate

use thiserror::Error;

/// Errors that can occur outside the validation channel
#[derive(Error, Debug)]
pub enum ChartError {
    /// Invalid chart type
    #[error("Invalid chart type: {0}")]
    InvalidChartType(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Serialization(err.to_string())
    }
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// A single problem found while validating a chart configuration.
///
/// Validation never fails fast: every problem is collected and the `Display`
/// text is what gets shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No configuration was supplied at all
    #[error("Chart configuration is required")]
    MissingConfiguration,

    /// The `type` field is not one of the supported kinds
    #[error("Invalid chart type: \"{0}\". Must be 'line', 'column', or 'pie'.")]
    InvalidChartType(String),

    /// The title is absent or blank
    #[error("Chart title is required")]
    MissingTitle,

    /// The series list is empty
    #[error("At least one series item is required")]
    EmptySeries,

    /// A series entry holds a negative value
    #[error("Series[{index}] \"{name}\" has negative value")]
    NegativeSeriesValue { index: usize, name: String },

    /// A series entry has no color
    #[error("Series[{index}] \"{name}\" is missing a color")]
    MissingSeriesColor { index: usize, name: String },
}
