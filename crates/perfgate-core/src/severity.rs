//! Traffic-light classification of metric values.
//!
//! API summaries and UI page summaries feed different consumers, so each has
//! its own label vocabulary: colour codes for API metrics and lowercase words
//! for pages. Both share the same banding rule.

use crate::model::ThresholdPair;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Band {
    Pass,
    Warn,
    Fail,
}

/// Inclusive on both boundaries. The red check runs on its own, so a value
/// past `red` is a failure even when `red <= yellow`.
fn band(value: f64, pair: ThresholdPair) -> Band {
    let mut band = Band::Pass;
    if value >= pair.yellow as f64 {
        band = Band::Warn;
    }
    if value >= pair.red as f64 {
        band = Band::Fail;
    }
    band
}

/// Severity of an API request metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "#028003")]
    Green,
    #[serde(rename = "#FFA400")]
    Yellow,
    #[serde(rename = "#FF0000")]
    Red,
}

impl Severity {
    pub fn classify(value: f64, pair: ThresholdPair) -> Self {
        match band(value, pair) {
            Band::Pass => Severity::Green,
            Band::Warn => Severity::Yellow,
            Band::Fail => Severity::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Green => "GREEN",
            Severity::Yellow => "YELLOW",
            Severity::Red => "RED",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity of a UI page time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSeverity {
    Green,
    Orange,
    Red,
}

impl PageSeverity {
    pub fn classify(value: f64, pair: ThresholdPair) -> Self {
        match band(value, pair) {
            Band::Pass => PageSeverity::Green,
            Band::Warn => PageSeverity::Orange,
            Band::Fail => PageSeverity::Red,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageSeverity::Green => "green",
            PageSeverity::Orange => "orange",
            PageSeverity::Red => "red",
        }
    }
}

impl fmt::Display for PageSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
