//! Finished battery results.

use crate::estimators::{Level, Verdict};
use serde::Serialize;

/// Verdicts of every estimator, in registration order.
#[derive(Debug, Clone, Serialize)]
pub struct BatteryReport {
    /// Bytes read from the input.
    pub bytes_consumed: u64,
    /// Whether input stopped early on an interrupt.
    pub interrupted: bool,
    /// Verdicts in registration order.
    pub verdicts: Vec<Verdict>,
}

impl BatteryReport {
    /// Number of verdicts at the given level.
    pub fn count(&self, level: Level) -> usize {
        self.verdicts.iter().filter(|v| v.level() == level).count()
    }

    /// Looks up a verdict by its dotted id.
    pub fn get(&self, test: &str) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.test == test)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_lookup() {
        let report = BatteryReport {
            bytes_consumed: 0,
            interrupted: false,
            verdicts: vec![
                Verdict::new("a", "a", Some(1.0), true, true),
                Verdict::new("b", "b", Some(0.5), true, false),
                Verdict::degenerate("c", "NaN"),
            ],
        };
        assert_eq!(report.count(Level::Ok), 1);
        assert_eq!(report.count(Level::Weak), 1);
        assert_eq!(report.count(Level::Fail), 1);
        assert_eq!(report.get("b").map(|v| v.level()), Some(Level::Weak));
        assert!(report.get("missing").is_none());
    }
}
