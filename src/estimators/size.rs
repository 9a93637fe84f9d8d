//! Input length check.

use super::{Estimator, Verdict};
use crate::sampling::SampleAssembler;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Reports whether the stream reached 1 KiB, 1 MiB and 1 GiB.
///
/// There is no weak tier: each threshold is either met or not.
#[derive(Debug)]
pub struct SizeTest {
    assembler: SampleAssembler,
    count: u64,
}

impl SizeTest {
    /// Creates the test with a zero count.
    pub fn new() -> Self {
        Self {
            assembler: SampleAssembler::new(1),
            count: 0,
        }
    }

    /// Samples (bytes) counted so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for SizeTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for SizeTest {
    fn name(&self) -> &'static str {
        "size"
    }

    fn assembler(&mut self) -> &mut SampleAssembler {
        &mut self.assembler
    }

    fn update(&mut self, _sample: u64) {
        self.count += 1;
    }

    fn finalize(&self) -> Vec<Verdict> {
        [
            ("size.1kib", "Input >= 1KB", KIB),
            ("size.1mib", "Input >= 1MB", MIB),
            ("size.1gib", "Input >= 1GB", GIB),
        ]
        .into_iter()
        .map(|(id, desc, threshold)| {
            Verdict::new(id, desc, Some(self.count as f64), false, self.count >= threshold)
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{run_bytes, Level};

    #[test]
    fn test_exactly_one_kib() {
        let verdicts = run_bytes(&mut SizeTest::new(), &[0u8; 1024]);
        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].hard);
        assert!(!verdicts[1].hard);
        assert!(verdicts.iter().all(|v| !v.weak));
    }

    #[test]
    fn test_one_byte_short() {
        let verdicts = run_bytes(&mut SizeTest::new(), &[0u8; 1023]);
        assert_eq!(verdicts[0].level(), Level::Fail);
    }
}
