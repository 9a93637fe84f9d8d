//! Monte Carlo estimate of pi.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;
use std::f64::consts::PI;

const WEAK_ERROR: f64 = 0.01;
const HARD_ERROR: f64 = 0.001;

/// Treats consecutive 24-bit samples as (x, y) points in a square of
/// side `max_sample` and counts how many fall inside the quarter circle
/// of the same radius. The inside fraction times four approximates pi.
#[derive(Debug)]
pub struct PiTest {
    assembler: SampleAssembler,
    /// First coordinate of a pair awaiting its partner.
    pending_x: Option<u64>,
    inside: u64,
    outside: u64,
}

impl PiTest {
    /// Creates the test with 3-byte samples and no classified pairs.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(3),
            pending_x: None,
            inside: 0,
            outside: 0,
        }
    }

    /// Number of (x, y) pairs classified so far.
    pub fn pairs(&self) -> u64 {
        self.inside + self.outside
    }
}

impl Default for PiTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for PiTest {
    fn name(&self) -> &'static str {
        "pi"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, sample: u64) {
        let Some(x) = self.pending_x.take() else {
            self.pending_x = Some(sample);
            return;
        };

        let radius = self.assembler.max_sample();
        if x * x + sample * sample < radius * radius {
            self.inside += 1;
        } else {
            self.outside += 1;
        }
    }

    fn finalize(&self) -> Vec<Verdict> {
        let pairs = self.pairs();
        if pairs == 0 {
            return vec![Verdict::degenerate("pi", "Pi: NaN")];
        }

        let estimate = 4.0 * self.inside as f64 / pairs as f64;
        let error = (PI - estimate).abs();

        tracing::debug!(estimate, error, pairs, "pi finalized");

        let (weak, hard) = grade(error);
        vec![Verdict::new(
            "pi",
            format!("Pi: {estimate:.6} (error: {error:.6})"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{run_bytes, Level};
    use rand_chacha::ChaCha20Rng;
    use rand_core::{RngCore, SeedableRng};

    fn pi_error(pairs: usize, seed: u64) -> f64 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut bytes = vec![0u8; pairs * 6];
        rng.fill_bytes(&mut bytes);
        let v = &run_bytes(&mut PiTest::new(), &bytes)[0];
        (v.statistic.unwrap() - PI).abs()
    }

    #[test]
    fn test_converges_with_more_pairs() {
        assert!(pi_error(10_000, 7) < 0.06);
        assert!(pi_error(1_000_000, 7) < WEAK_ERROR);
    }

    #[test]
    fn test_unpaired_sample_is_degenerate() {
        let mut est = PiTest::new();
        let v = &run_bytes(&mut est, &[0x12, 0x34, 0x56])[0];
        assert_eq!(est.pairs(), 0);
        assert!(v.is_degenerate());
        assert_eq!(v.level(), Level::Fail);
    }

    #[test]
    fn test_point_classification() {
        let mut est = PiTest::new();
        let max = 1u64 << 24;
        est.update(0);
        est.update(max - 1);
        est.update(max - 1);
        est.update(max - 1);
        // odd leftover is never counted
        est.update(0);
        assert_eq!((est.inside, est.outside), (1, 1));
    }

    /// Feeds `inside` points at the origin and the rest at the far corner.
    fn with_counts(inside: u64, pairs: u64) -> PiTest {
        let corner = (1u64 << 24) - 1;
        let mut est = PiTest::new();
        for i in 0..pairs {
            let p = if i < inside { 0 } else { corner };
            est.update(p);
            est.update(p);
        }
        est
    }

    #[test]
    fn test_error_bounds_are_exclusive() {
        assert_eq!(grade(HARD_ERROR), (true, false));
        assert_eq!(grade(WEAK_ERROR), (false, false));
        assert_eq!(grade(HARD_ERROR * 0.999), (true, true));
        assert_eq!(grade(WEAK_ERROR * 0.999), (true, false));
    }

    #[test]
    fn test_chosen_points_levels() {
        // 4 * 785 / 1000 = 3.14, error 0.0016
        let v = &with_counts(785, 1000).finalize()[0];
        assert_eq!(v.statistic, Some(3.14));
        assert_eq!(v.level(), Level::Weak);

        // 4 * 78540 / 100000 = 3.1416, error 7e-6
        let v = &with_counts(78_540, 100_000).finalize()[0];
        assert_eq!(v.level(), Level::Ok);

        // 4 * 780 / 1000 = 3.12, error 0.0216
        let v = &with_counts(780, 1000).finalize()[0];
        assert_eq!(v.level(), Level::Fail);
    }
}
