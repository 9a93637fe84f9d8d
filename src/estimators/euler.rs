//! Renewal-process estimate of Euler's number.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;
use std::f64::consts::E;

const WEAK_ERROR: f64 = 0.01;
const HARD_ERROR: f64 = 0.001;

/// Draws uniform values in `[0, 1)` (56-bit samples scaled by
/// `max_sample`) until their sum reaches 1, then starts over. The mean
/// number of draws per completed run approximates e.
#[derive(Debug)]
pub struct EulerTest {
    assembler: SampleAssembler,
    total: u64,
    runs: u64,
    /// Sum of the current run, always below `max_sample`.
    acc: u64,
}

impl EulerTest {
    /// Creates the test with 7-byte samples and no completed runs.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(7),
            total: 0,
            runs: 0,
            acc: 0,
        }
    }

    /// Completed runs so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

impl Default for EulerTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for EulerTest {
    fn name(&self) -> &'static str {
        "euler"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, sample: u64) {
        self.total += 1;
        self.acc += sample;
        if self.acc >= self.assembler.max_sample() {
            self.acc = 0;
            self.runs += 1;
        }
    }

    fn finalize(&self) -> Vec<Verdict> {
        if self.runs == 0 {
            return vec![Verdict::degenerate("euler", "e:  NaN")];
        }

        let estimate = self.total as f64 / self.runs as f64;
        let error = (E - estimate).abs();

        tracing::debug!(estimate, error, runs = self.runs, "euler finalized");

        let (weak, hard) = grade(error);
        vec![Verdict::new(
            "euler",
            format!("e:  {estimate:.6} (error: {error:.6})"),
            Some(estimate),
            weak,
            hard,
        )]
    }
}

/// Weak and hard flags for an absolute error; both bounds are exclusive.
fn grade(error: f64) -> (bool, bool) {
    (error < WEAK_ERROR, error < HARD_ERROR)
}
