//! Discrete median of byte values.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;
use std::ops::RangeInclusive;

const WEAK_RANGE: RangeInclusive<usize> = 125..=130;
const HARD_RANGE: RangeInclusive<usize> = 126..=129;

/// Locates the central byte value of the stream.
///
/// Despite the historical name this is a median: the smallest value
/// whose inclusive cumulative count reaches half of all samples. For
/// uniform bytes it lands between 126 and 129.
#[derive(Debug)]
pub struct MeanTest {
    assembler: SampleAssembler,
    hist: [u64; 256],
    count: u64,
}

impl MeanTest {
    /// Creates the test with 1-byte samples and an empty histogram.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(1),
            hist: [0; 256],
            count: 0,
        }
    }

    /// Smallest value `m` with `2 * count(<= m) >= total`.
    ///
    /// Older reports printed `m + 1` (their scan stopped one past the
    /// crossing) and applied the bands to that value.
    fn median(&self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }

        let mut prefix = 0u64;
        self.hist.iter().position(|&n| {
            prefix += n;
            2 * prefix >= self.count
        })
    }
}

impl Default for MeanTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for MeanTest {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, sample: u64) {
        self.hist[sample as usize] += 1;
        self.count += 1;
    }

    fn finalize(&self) -> Vec<Verdict> {
        let Some(m) = self.median() else {
            return vec![Verdict::degenerate("mean", "Median: NaN")];
        };

        vec![Verdict::new(
            "mean",
            format!("Median: {m}"),
            Some(m as f64),
            WEAK_RANGE.contains(&m),
            HARD_RANGE.contains(&m),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{run_bytes, Level};

    #[test]
    fn test_uniform_blocks_pass() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(256 * 8).collect();
        let v = &run_bytes(&mut MeanTest::new(), &bytes)[0];
        assert_eq!(v.statistic, Some(127.0));
        assert_eq!(v.level(), Level::Ok);
    }

    #[test]
    fn test_first_crossing_wins() {
        // Half the mass at 0: the crossing happens immediately.
        let bytes: Vec<u8> = [0x00, 0xFF].repeat(50);
        let v = &run_bytes(&mut MeanTest::new(), &bytes)[0];
        assert_eq!(v.statistic, Some(0.0));
        assert_eq!(v.level(), Level::Fail);
    }

    #[test]
    fn test_weak_band() {
        let v = &run_bytes(&mut MeanTest::new(), &[130u8; 10])[0];
        assert_eq!(v.level(), Level::Weak);
        let v = &run_bytes(&mut MeanTest::new(), &[131u8; 10])[0];
        assert_eq!(v.level(), Level::Fail);
    }

    #[test]
    fn test_no_samples_is_degenerate() {
        assert!(MeanTest::new().finalize()[0].is_degenerate());
    }
}
