//! Known-good input for comparison runs.
//!
//! Feeding the battery from a ChaCha20 keystream shows what a healthy
//! source's report looks like at a given input length.

mod reference;

pub use reference::ReferenceSource;
