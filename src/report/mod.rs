//! Report rendering.
//!
//! Turns a finished [`BatteryReport`](crate::battery::BatteryReport) into
//! text lines, a TOML document, or Prometheus exposition. Rendering options
//! are passed in explicitly; nothing here is global state.

mod render;
mod style;

pub use render::{OutputFormat, ReportError, Reporter, DEFAULT_WIDTH};
pub use style::ColorMode;
