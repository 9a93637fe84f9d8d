//! Sample assembly.
//!
//! Every estimator views the byte stream through its own assembler,
//! which groups consecutive bytes into fixed-width big-endian integers.

mod assembler;

pub use assembler::{SampleAssembler, MAX_WIDTH};
