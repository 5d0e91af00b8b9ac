//! Configuration validation
//!
//! All checks run independently and every problem is reported, so an editor
//! can show the full list at once.

use crate::error::ValidationError;
use crate::model::{ChartConfig, ChartKind};

/// Validate a configuration, collecting every problem found.
///
/// An empty result means the configuration may be normalized and laid out.
pub fn validate(config: Option<&ChartConfig>) -> Vec<ValidationError> {
    let Some(config) = config else {
        return vec![ValidationError::MissingConfiguration];
    };

    let mut errors = Vec::new();

    if config.chart_type.parse::<ChartKind>().is_err() {
        errors.push(ValidationError::InvalidChartType(config.chart_type.clone()));
    }

    if config.title.trim().is_empty() {
        errors.push(ValidationError::MissingTitle);
    }

    if config.series.is_empty() {
        errors.push(ValidationError::EmptySeries);
    }

    for (index, entry) in config.series.iter().enumerate() {
        if entry.value < 0.0 {
            errors.push(ValidationError::NegativeSeriesValue {
                index,
                name: entry.name.clone(),
            });
        }
        if entry.color.is_empty() {
            errors.push(ValidationError::MissingSeriesColor {
                index,
                name: entry.name.clone(),
            });
        }
    }

    errors
}

/// Validate a configuration and render the problems as display strings
pub fn validate_options(config: Option<&ChartConfig>) -> Vec<String> {
    validate(config).iter().map(ToString::to_string).collect()
}
