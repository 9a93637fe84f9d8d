//! Streaming Randomness Smoke Tests
//!
//! Consumes an arbitrary-length byte stream and runs a battery of
//! independent statistical estimators over it, each reporting an
//! OK / Weak / Fail verdict on whether the stream looks uniformly random.
//!
//! # Architecture
//!
//! ```text
//! byte → (per estimator) SampleAssembler → sample → Estimator::update
//!                                  … end of stream → Estimator::finalize → Verdict → Reporter
//! ```
//!
//! # Design Principles
//!
//! - **Streaming**: input is never buffered in full; every estimator keeps
//!   a fixed amount of state regardless of stream length
//! - **Isolated estimators**: each test owns its state and its assembler
//! - **Degenerate, not fatal**: too little input yields a Fail verdict,
//!   never an error
//! - **No statistical claims**: these are quick sanity checks, not a
//!   substitute for a full test suite
//!
//! # Example
//!
//! ```
//! use rng_battery::{Battery, Level};
//!
//! let mut battery = Battery::standard();
//! battery.feed(&[0u8; 4096]);
//!
//! let report = battery.finish();
//! assert_eq!(report.verdicts.len(), 12);
//! assert_eq!(report.get("size.1kib").map(|v| v.level()), Some(Level::Ok));
//! assert_eq!(report.get("average").map(|v| v.level()), Some(Level::Fail));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod battery;
pub mod config;
pub mod estimators;
pub mod metrics;
pub mod report;
pub mod sampling;
pub mod source;

// Re-export commonly used types at crate root
pub use battery::{Battery, BatteryError, BatteryReport};
pub use config::{ConfigError, FileConfig};
pub use estimators::{Estimator, EstimatorKind, Level, Verdict};
pub use report::{ColorMode, OutputFormat, Reporter};
pub use sampling::SampleAssembler;
pub use source::ReferenceSource;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
