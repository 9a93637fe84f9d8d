//! Test registry and stream driver.
//!
//! A [`Battery`] holds the registered estimators in order and broadcasts
//! every input byte to each of them. Finishing the battery consumes it,
//! so every estimator is finalized exactly once.

mod outcome;
mod runner;

pub use outcome::BatteryReport;
pub use runner::{Battery, BatteryError, DEFAULT_CHUNK_SIZE};
