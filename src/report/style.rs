//! Terminal styling for status tags.

use crate::estimators::Level;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    #[default]
    Auto,
    /// Always emit color codes.
    Always,
    /// Never emit color codes.
    Never,
}

impl ColorMode {
    /// Resolves `Auto` against the current stdout.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Status tag text, padded to four columns.
pub(crate) fn tag(level: Level) -> &'static str {
    match level {
        Level::Ok => " OK ",
        Level::Weak => "Weak",
        Level::Fail => "Fail",
    }
}

/// Opening escape sequence for a level.
pub(crate) fn color(level: Level) -> String {
    match level {
        Level::Ok => GREEN.to_string(),
        Level::Weak => YELLOW.to_string(),
        Level::Fail => format!("{RED}{BOLD}"),
    }
}

pub(crate) fn reset() -> &'static str {
    RESET
}
