//! Report output formats.

use super::style::{self, ColorMode};
use crate::battery::BatteryReport;
use crate::estimators::Verdict;
use crate::metrics::{self, MetricsError};
use serde::{Deserialize, Serialize};
use std::io::Write;
use thiserror::Error;

/// Column the description (plus dash leader) is right-aligned to.
pub const DEFAULT_WIDTH: usize = 60;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// The report could not be serialized as TOML.
    #[error("failed to serialize report: {0}")]
    Toml(#[from] toml::ser::Error),
    /// Prometheus rendering failed.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line per verdict.
    #[default]
    Text,
    /// The report serialized as TOML.
    Toml,
    /// Prometheus text exposition.
    Prometheus,
}

/// Writes battery reports.
#[derive(Debug, Clone)]
pub struct Reporter {
    format: OutputFormat,
    color: bool,
    width: usize,
}

impl Reporter {
    /// Creates a reporter; `ColorMode::Auto` is resolved here against stdout.
    pub fn new(format: OutputFormat, color: ColorMode, width: usize) -> Self {
        Self {
            format,
            color: color.enabled(),
            width,
        }
    }

    /// Renders one verdict as a text line (no trailing newline).
    pub fn line(&self, verdict: &Verdict) -> String {
        let desc = &verdict.description;
        let leader = "-".repeat(self.width.saturating_sub(desc.chars().count()));
        let padded = format!("{desc} {leader}");
        let level = verdict.level();

        if self.color {
            format!(
                "{padded:>width$} [{}{}{}]",
                style::color(level),
                style::tag(level),
                style::reset(),
                width = self.width
            )
        } else {
            format!("{padded:>width$} [{}]", style::tag(level), width = self.width)
        }
    }

    /// Writes the whole report in the configured format.
    pub fn write<W: Write>(&self, report: &BatteryReport, mut out: W) -> Result<(), ReportError> {
        match self.format {
            OutputFormat::Text => {
                for verdict in &report.verdicts {
                    writeln!(out, "{}", self.line(verdict))?;
                }
            }
            OutputFormat::Toml => {
                out.write_all(toml::to_string(report)?.as_bytes())?;
            }
            OutputFormat::Prometheus => {
                out.write_all(metrics::render(report)?.as_bytes())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::Text, ColorMode::Auto, DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::Battery;

    fn plain() -> Reporter {
        Reporter::new(OutputFormat::Text, ColorMode::Never, DEFAULT_WIDTH)
    }

    #[test]
    fn test_plain_line_layout() {
        let v = Verdict::new("size.1kib", "Input >= 1KB", Some(2048.0), false, true);
        let line = plain().line(&v);
        assert!(line.starts_with("Input >= 1KB ----"));
        assert!(line.ends_with(" [ OK ]"));
        assert_eq!(line.chars().count(), 61 + " [ OK ]".len());
    }

    #[test]
    fn test_long_description_not_truncated() {
        let desc = "x".repeat(80);
        let line = plain().line(&Verdict::degenerate("t", desc.clone()));
        assert_eq!(line, format!("{desc}  [Fail]"));
    }

    #[test]
    fn test_colored_tags() {
        let r = Reporter::new(OutputFormat::Text, ColorMode::Always, DEFAULT_WIDTH);
        let line = r.line(&Verdict::new("t", "weak", Some(0.0), true, false));
        assert!(line.ends_with("[\x1b[33mWeak\x1b[0m]"));
        let line = r.line(&Verdict::degenerate("t", "bad"));
        assert!(line.contains("\x1b[31m\x1b[1mFail"));
    }

    #[test]
    fn test_text_report_has_one_line_per_verdict() {
        let mut battery = Battery::standard();
        battery.feed(&[0u8; 2048]);
        let mut out = Vec::new();
        plain().write(&battery.finish(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().next().unwrap().ends_with("[ OK ]"));
    }

    #[test]
    fn test_toml_report() {
        let mut battery = Battery::standard();
        battery.feed(&[7u8; 100]);
        let mut out = Vec::new();
        Reporter::new(OutputFormat::Toml, ColorMode::Never, DEFAULT_WIDTH)
            .write(&battery.finish(), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("bytes_consumed = 100"));
        assert!(text.contains("[[verdicts]]"));
        assert!(text.contains("test = \"lcmc.prefix\""));
    }
}
