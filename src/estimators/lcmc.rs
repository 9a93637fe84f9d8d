//! Least-common / most-common bucket ratios.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;

const WEAK_RATIO: f64 = 0.90;
const HARD_RATIO: f64 = 0.95;

// The co-occurrence table is sparse per row, so its weak bar is far lower.
const PREFIX_WEAK_RATIO: f64 = 0.1;
const PREFIX_HARD_RATIO: f64 = 0.9;

type Histogram = [u64; 256];

/// Checks that no byte value (or derived value) is much rarer than the
/// most common one. A ratio of 0 means some value never occurred.
///
/// Tracks the raw values, `cur ^ prev`, `cur + prev`, `cur - prev`
/// (mod 256) and a 256x256 table of `(prev, cur)` pairs. The first
/// sample is paired with a previous value of 0.
pub struct LcmcTest {
    assembler: SampleAssembler,
    raw: Histogram,
    xor: Histogram,
    sum: Histogram,
    diff: Histogram,
    /// Row-major `[prev][cur]` counts.
    prefix: Box<[u64]>,
    last: u8,
}

impl LcmcTest {
    /// Creates the test with empty histograms and a previous value of 0.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(1),
            raw: [0; 256],
            xor: [0; 256],
            sum: [0; 256],
            diff: [0; 256],
            prefix: vec![0; 256 * 256].into_boxed_slice(),
            last: 0,
        }
    }

    /// Worst per-row ratio of the co-occurrence table.
    ///
    /// A row with no entries counts as 0.
    fn worst_prefix_ratio(&self) -> f64 {
        self.prefix
            .chunks_exact(256)
            .map(|row| lc_mc_ratio(row).unwrap_or(0.0))
            .fold(1.0, f64::min)
    }
}

impl Default for LcmcTest {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LcmcTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcmcTest")
            .field("samples", &self.raw.iter().sum::<u64>())
            .field("last", &self.last)
            .finish()
    }
}

/// `min / max` over the buckets, or `None` if every bucket is empty.
fn lc_mc_ratio(buckets: &[u64]) -> Option<f64> {
    let most = buckets.iter().copied().max().unwrap_or(0);
    if most == 0 {
        return None;
    }
    let least = buckets.iter().copied().min().unwrap_or(0);
    Some(least as f64 / most as f64)
}

impl Estimator for LcmcTest {
    fn name(&self) -> &'static str {
        "lcmc"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, sample: u64) {
        let cur = sample as u8;
        let prev = self.last;

        self.raw[cur as usize] += 1;
        self.xor[(cur ^ prev) as usize] += 1;
        self.sum[cur.wrapping_add(prev) as usize] += 1;
        self.diff[cur.wrapping_sub(prev) as usize] += 1;
        self.prefix[prev as usize * 256 + cur as usize] += 1;

        self.last = cur;
    }

    fn finalize(&self) -> Vec<Verdict> {
        let mut verdicts: Vec<Verdict> = [
            ("lcmc.8bit", "8-bit", &self.raw),
            ("lcmc.xor", "Xor", &self.xor),
            ("lcmc.sum", "Sum", &self.sum),
            ("lcmc.diff", "Diff", &self.diff),
        ]
        .into_iter()
        .map(|(id, style, hist)| match lc_mc_ratio(hist) {
            Some(ratio) => Verdict::new(
                id,
                format!("({style:>6}) lc/mc ratio: {ratio:.6}"),
                Some(ratio),
                ratio >= WEAK_RATIO,
                ratio >= HARD_RATIO,
            ),
            None => Verdict::degenerate(id, format!("({style:>6}) lc/mc ratio: NaN")),
        })
        .collect();

        let worst = self.worst_prefix_ratio();
        tracing::debug!(worst, "lcmc prefix table finalized");

        verdicts.push(Verdict::new(
            "lcmc.prefix",
            format!("(Prefix) lc/mc ratio: {worst:.6}"),
            Some(worst),
            worst >= PREFIX_WEAK_RATIO,
            worst >= PREFIX_HARD_RATIO,
        ));
        verdicts
    }
}
