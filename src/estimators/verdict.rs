//! Three-level test outcomes.

use serde::Serialize;
use std::fmt;

/// Observable outcome of a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Neither threshold met.
    Fail,
    /// Weak threshold met only.
    Weak,
    /// Hard threshold met.
    Ok,
}

impl Level {
    /// Numeric encoding used by metrics (0 fail, 1 weak, 2 ok).
    pub fn as_code(self) -> i64 {
        match self {
            Level::Fail => 0,
            Level::Weak => 1,
            Level::Ok => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Fail => "Fail",
            Level::Weak => "Weak",
            Level::Ok => "OK",
        })
    }
}

/// Result of classifying one statistic.
///
/// `hard` is expected to imply `weak`, but the level is derived with
/// `hard` taking precedence so an estimator without a weak tier can
/// still report OK.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// Dotted identifier, e.g. `lcmc.xor`.
    pub test: &'static str,
    /// Human-readable text including the statistic.
    pub description: String,
    /// The computed statistic, absent for degenerate results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<f64>,
    /// Statistic met the loose threshold.
    pub weak: bool,
    /// Statistic met the strict threshold.
    pub hard: bool,
}

impl Verdict {
    /// Creates a verdict from its parts.
    pub fn new(
        test: &'static str,
        description: impl Into<String>,
        statistic: Option<f64>,
        weak: bool,
        hard: bool,
    ) -> Self {
        Self {
            test,
            description: description.into(),
            statistic,
            weak,
            hard,
        }
    }

    /// A Fail result for a statistic that could not be computed.
    pub fn degenerate(test: &'static str, description: impl Into<String>) -> Self {
        Self::new(test, description, None, false, false)
    }

    /// Observable level; `hard` wins over `weak`.
    pub fn level(&self) -> Level {
        if self.hard {
            Level::Ok
        } else if self.weak {
            Level::Weak
        } else {
            Level::Fail
        }
    }

    /// True when no statistic could be computed.
    pub fn is_degenerate(&self) -> bool {
        self.statistic.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_takes_precedence() {
        let v = Verdict::new("size.1kib", "Input >= 1KB", Some(1024.0), false, true);
        assert_eq!(v.level(), Level::Ok);
    }

    #[test]
    fn test_levels() {
        assert_eq!(Verdict::new("t", "", Some(0.0), true, false).level(), Level::Weak);
        assert_eq!(Verdict::degenerate("t", "NaN").level(), Level::Fail);
        assert!(Verdict::degenerate("t", "NaN").is_degenerate());
    }

    #[test]
    fn test_level_codes_ordered() {
        assert!(Level::Fail < Level::Weak && Level::Weak < Level::Ok);
        assert_eq!(Level::Ok.as_code(), 2);
        assert_eq!(Level::Ok.to_string(), "OK");
    }
}
