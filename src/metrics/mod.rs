//! Prometheus exposition of battery results.
//!
//! Renders a finished report in the Prometheus text format so a one-shot
//! run can be scraped through a textfile collector or pushed to a gateway.
//!
//! # Metrics Exposed
//!
//! - `rng_battery_bytes_consumed` - Bytes read from the input
//! - `rng_battery_statistic{test}` - Computed statistic per verdict
//!   (omitted for degenerate results)
//! - `rng_battery_verdict_level{test}` - Verdict level (0=fail, 1=weak, 2=ok)
//!
//! # Example
//!
//! ```
//! use rng_battery::{battery::Battery, metrics};
//!
//! let mut battery = Battery::standard();
//! battery.feed(&[0u8; 16]);
//! let text = metrics::render(&battery.finish()).unwrap();
//! assert!(text.contains("rng_battery_bytes_consumed 16"));
//! ```

mod collector;

pub use collector::{render, MetricsError, VerdictMetrics};
