//! Chart Layout - geometry engine for line, column, and pie charts
//!
//! This crate turns a chart configuration into exact drawing primitives:
//! - Validating raw configurations and collecting user-facing errors
//! - Normalizing options against documented defaults
//! - Computing plot-area margins and "nice" value-axis ticks
//! - Building line points, column bars, and pie/donut slices
//! - Writing SVG path data for curves, areas, and arcs
//! - Formatting values for labels
//!
//! Every function is pure; nothing is cached between calls.

mod model;
mod error;
mod validate;
mod config;
mod layout;
mod scale;
mod geometry;
mod path;
mod format;

pub use model::*;
pub use error::*;
pub use validate::*;
pub use config::*;
pub use layout::*;
pub use scale::*;
pub use geometry::*;
pub use path::*;
pub use format::*;
