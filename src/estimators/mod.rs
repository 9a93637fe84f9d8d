//! Streaming statistical estimators.
//!
//! Each estimator consumes the byte stream incrementally through its own
//! [`SampleAssembler`], keeps a fixed amount of running state, and only
//! derives its statistic when the stream has ended. These are smoke tests,
//! not proofs of randomness.

mod average;
mod euler;
mod lcmc;
mod mean;
mod pi;
mod size;
mod verdict;

pub use average::AverageTest;
pub use euler::EulerTest;
pub use lcmc::LcmcTest;
pub use mean::MeanTest;
pub use pi::PiTest;
pub use size::SizeTest;
pub use verdict::{Level, Verdict};

use crate::sampling::SampleAssembler;
use serde::{Deserialize, Serialize};

/// A single streaming test over assembled samples.
pub trait Estimator: Send {
    /// Stable identifier, also used as the verdict id prefix.
    fn name(&self) -> &'static str;

    /// The assembler feeding this estimator.
    fn assembler(&mut self) -> &mut SampleAssembler;

    /// Folds one assembled sample into the running state.
    fn update(&mut self, sample: u64);

    /// Derives the statistic(s) and classifies them.
    ///
    /// Called once, after the whole stream has been consumed.
    fn finalize(&self) -> Vec<Verdict>;

    /// Feeds one raw byte, updating state when a sample completes.
    #[inline]
    fn process_byte(&mut self, byte: u8) {
        if let Some(sample) = self.assembler().feed(byte) {
            self.update(sample);
        }
    }
}

/// The estimators that can be placed in a battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatorKind {
    /// Input length thresholds ([`SizeTest`]).
    Size,
    /// Mean byte value ([`AverageTest`]).
    Average,
    /// Median byte value ([`MeanTest`]).
    Mean,
    /// Monte Carlo pi ([`PiTest`]).
    Pi,
    /// Renewal estimate of e ([`EulerTest`]).
    Euler,
    /// Bucket ratios ([`LcmcTest`]).
    Lcmc,
}

impl EstimatorKind {
    /// Default registration order.
    pub const ALL: [EstimatorKind; 6] = [
        EstimatorKind::Size,
        EstimatorKind::Average,
        EstimatorKind::Mean,
        EstimatorKind::Pi,
        EstimatorKind::Euler,
        EstimatorKind::Lcmc,
    ];

    /// Creates a fresh estimator of this kind with zeroed state.
    pub fn build(self) -> Box<dyn Estimator> {
        match self {
            EstimatorKind::Size => Box::new(SizeTest::new()),
            EstimatorKind::Average => Box::new(AverageTest::new()),
            EstimatorKind::Mean => Box::new(MeanTest::new()),
            EstimatorKind::Pi => Box::new(PiTest::new()),
            EstimatorKind::Euler => Box::new(EulerTest::new()),
            EstimatorKind::Lcmc => Box::new(LcmcTest::new()),
        }
    }
}

#[cfg(test)]
pub(crate) fn run_bytes(estimator: &mut dyn Estimator, bytes: &[u8]) -> Vec<Verdict> {
    for &b in bytes {
        estimator.process_byte(b);
    }
    estimator.finalize()
}
