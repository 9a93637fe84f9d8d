//! Arithmetic mean of byte values.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;

/// Weak pass tolerance, as a fraction of the value range.
const WEAK_ERROR: f64 = 0.02;
/// Hard pass tolerance, as a fraction of the value range.
const HARD_ERROR: f64 = 0.01;

/// Compares the running average against the midpoint of the value range.
///
/// Uniform bytes settle near the midpoint quickly, so only a small
/// tolerance is allowed.
#[derive(Debug)]
pub struct AverageTest {
    assembler: SampleAssembler,
    sum: u64,
    count: u64,
}

impl AverageTest {
    /// Creates the test with 1-byte samples and zeroed sums.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(1),
            sum: 0,
            count: 0,
        }
    }
}

impl Default for AverageTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for AverageTest {
    fn name(&self) -> &'static str {
        "average"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, sample: u64) {
        self.sum += sample;
        self.count += 1;
    }

    fn finalize(&self) -> Vec<Verdict> {
        if self.count == 0 {
            return vec![Verdict::degenerate("average", "Average: NaN")];
        }

        let max = self.assembler.max_sample() as f64;
        let expected = 0.5 * max;
        let avg = self.sum as f64 / self.count as f64;
        let error = ((avg - expected) / max).abs();

        tracing::debug!(avg, error, "average finalized");

        vec![Verdict::new(
            "average",
            format!("Average: {avg:.6}"),
            Some(avg),
            error <= WEAK_ERROR,
            error <= HARD_ERROR,
        )]
    }
}
