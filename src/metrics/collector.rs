//! Metrics collection and registry.

use crate::battery::BatteryReport;
use prometheus::{Encoder, GaugeVec, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Registering or encoding a metric failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
    /// The encoder produced invalid UTF-8.
    #[error("metrics output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Prometheus registry holding the battery metrics.
pub struct VerdictMetrics {
    registry: Registry,
    bytes_consumed: IntGauge,
    statistic: GaugeVec,
    level: IntGaugeVec,
}

impl VerdictMetrics {
    /// Creates a registry with all battery metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let bytes_consumed =
            IntGauge::new("rng_battery_bytes_consumed", "Bytes read from the input")?;
        let statistic = GaugeVec::new(
            Opts::new("rng_battery_statistic", "Statistic computed by each test"),
            &["test"],
        )?;
        let level = IntGaugeVec::new(
            Opts::new(
                "rng_battery_verdict_level",
                "Verdict per test (0=fail, 1=weak, 2=ok)",
            ),
            &["test"],
        )?;

        registry.register(Box::new(bytes_consumed.clone()))?;
        registry.register(Box::new(statistic.clone()))?;
        registry.register(Box::new(level.clone()))?;

        Ok(Self {
            registry,
            bytes_consumed,
            statistic,
            level,
        })
    }

    /// Records every verdict of a report.
    pub fn update(&self, report: &BatteryReport) {
        self.bytes_consumed.set(report.bytes_consumed as i64);

        for verdict in &report.verdicts {
            if let Some(value) = verdict.statistic {
                self.statistic.with_label_values(&[verdict.test]).set(value);
            }
            self.level
                .with_label_values(&[verdict.test])
                .set(verdict.level().as_code());
        }
    }

    /// Encodes all metrics in the Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Renders a report as Prometheus text exposition.
pub fn render(report: &BatteryReport) -> Result<String, MetricsError> {
    let metrics = VerdictMetrics::new()?;
    metrics.update(report);
    metrics.encode()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::Verdict;

    fn sample_report() -> BatteryReport {
        BatteryReport {
            bytes_consumed: 4096,
            interrupted: false,
            verdicts: vec![
                Verdict::new("average", "Average: 127.5", Some(127.5), true, true),
                Verdict::degenerate("pi", "Pi: NaN"),
            ],
        }
    }

    #[test]
    fn test_levels_and_statistics_exported() {
        let text = render(&sample_report()).unwrap();
        assert!(text.contains("rng_battery_bytes_consumed 4096"));
        assert!(text.contains("rng_battery_statistic{test=\"average\"} 127.5"));
        assert!(text.contains("rng_battery_verdict_level{test=\"average\"} 2"));
        assert!(text.contains("rng_battery_verdict_level{test=\"pi\"} 0"));
    }

    #[test]
    fn test_degenerate_has_no_statistic() {
        let text = render(&sample_report()).unwrap();
        assert!(!text.contains("rng_battery_statistic{test=\"pi\"}"));
    }
}
