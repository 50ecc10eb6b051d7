//! Conversion results and the direction of a conversion.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which way a document is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// v3 HSL triples to v4 `oklch()` literals, removing `@layer base`.
    #[serde(alias = "v4")]
    V3ToV4,
    /// v4 `oklch()` literals to v3 HSL triples, adding `@layer base`.
    #[serde(alias = "v3")]
    V4ToV3,
}

impl Direction {
    /// The other direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::V3ToV4 => Direction::V4ToV3,
            Direction::V4ToV3 => Direction::V3ToV4,
        }
    }

    /// Dialect version of the input (3 or 4).
    pub fn source_version(self) -> u8 {
        match self {
            Direction::V3ToV4 => 3,
            Direction::V4ToV3 => 4,
        }
    }

    /// Dialect version of the output (3 or 4).
    pub fn target_version(self) -> u8 {
        self.reverse().source_version()
    }

    /// Conventional file name for saved output, e.g. `tailwind-v4-variables.css`.
    pub fn output_file_name(self) -> String {
        format!("tailwind-v{}-variables.css", self.target_version())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::V3ToV4 => write!(f, "v3-to-v4"),
            Direction::V4ToV3 => write!(f, "v4-to-v3"),
        }
    }
}

/// Error returned when parsing a [`Direction`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction '{0}' (expected v3, v4, v3-to-v4 or v4-to-v3)")]
pub struct ParseDirectionError(pub String);

/// Accepts either the full name (`v3-to-v4`) or the target version (`v4`).
impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v3-to-v4" | "v4" | "4" => Ok(Direction::V3ToV4),
            "v4-to-v3" | "v3" | "3" => Ok(Direction::V4ToV3),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// The result of converting one document.
///
/// `succeeded` is true exactly when there are no diagnostics. Diagnostics here
/// only describe values that looked like colors but could not be converted;
/// structural problems are reported separately by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutcome {
    succeeded: bool,
    converted_text: String,
    diagnostics: Vec<String>,
}

impl ConversionOutcome {
    pub(crate) fn new(converted_text: String, diagnostics: Vec<String>) -> Self {
        Self {
            succeeded: diagnostics.is_empty(),
            converted_text,
            diagnostics,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn converted_text(&self) -> &str {
        &self.converted_text
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn into_text(self) -> String {
        self.converted_text
    }

    pub fn stats(&self) -> ConversionStats {
        ConversionStats::of(&self.converted_text)
    }
}

static VARIABLE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--[A-Za-z0-9_-]+:").expect("variable pattern is valid"));

/// Summary counts over a converted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Lines that are not blank.
    pub lines: usize,
    /// Custom-property declarations (`--name:` occurrences).
    pub variables: usize,
}

impl ConversionStats {
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.split('\n').filter(|l| !l.trim().is_empty()).count(),
            variables: VARIABLE_PATTERN.find_iter(text).count(),
        }
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines, {} variables converted",
            self.lines, self.variables
        )
    }
}

/// Conversion outcome and validation advisories for the same input.
///
/// The two channels are independent: validation findings never change
/// [`ConversionOutcome::succeeded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,
    pub outcome: ConversionOutcome,
    pub validation: Vec<String>,
}

impl ConversionReport {
    pub fn stats(&self) -> ConversionStats {
        self.outcome.stats()
    }

    /// True when the conversion succeeded and validation found nothing.
    pub fn is_clean(&self) -> bool {
        self.outcome.succeeded() && self.validation.is_empty()
    }
}
