use crate::errors::{ReportError, ReportResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a dataset in the measurement store.
///
/// Every read takes the dataset explicitly; the store keeps no notion of a
/// "current" dataset. Names double as SQLite schema names, so they are
/// restricted to ASCII alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dataset(String);

impl Dataset {
    pub fn new(name: impl Into<String>) -> ReportResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ReportError::InvalidDataset {
                name,
                reason: "name is empty".to_string(),
            });
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(ReportError::InvalidDataset {
                reason: format!("unsupported character {c:?}"),
                name,
            });
        }
        if name.eq_ignore_ascii_case("main") || name.eq_ignore_ascii_case("temp") {
            return Err(ReportError::InvalidDataset {
                name,
                reason: "reserved schema name".to_string(),
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Datasets consulted by one report.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub comparison: Dataset,
    pub thresholds: Dataset,
    pub ui: Dataset,
}

/// Selection criteria for API load-test builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSelection {
    pub simulation: String,
    pub test_type: String,
    pub users: i64,
    pub limit: u32,
}

impl ApiSelection {
    /// Substring that marks audit (baseline) builds of this simulation.
    pub fn audit_marker(&self) -> String {
        audit_marker(&self.simulation)
    }
}

impl fmt::Display for ApiSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "simulation={} test_type={} users={}",
            self.simulation, self.test_type, self.users
        )
    }
}

/// Selection criteria for UI page-load builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSelection {
    pub scenario: String,
    pub suite: String,
    pub limit: u32,
}

impl UiSelection {
    pub fn audit_marker(&self) -> String {
        audit_marker(&self.scenario)
    }
}

impl fmt::Display for UiSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scenario={} suite={}", self.scenario, self.suite)
    }
}

pub fn audit_marker(test_name: &str) -> String {
    format!("audit_{test_name}_")
}

/// Yellow/red boundary pair for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub yellow: i64,
    pub red: i64,
}

impl ThresholdPair {
    pub const fn new(yellow: i64, red: i64) -> Self {
        Self { yellow, red }
    }
}

/// Which call site a threshold lookup belongs to; each has its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricDomain {
    /// Request response times of API load tests.
    Api,
    /// Derived page time of UI tests.
    Page,
}

impl MetricDomain {
    pub const fn default_thresholds(self) -> ThresholdPair {
        match self {
            MetricDomain::Api => ThresholdPair::new(2000, 3000),
            MetricDomain::Page => ThresholdPair::new(150, 1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names_are_schema_safe() {
        assert!(Dataset::new("comparison").is_ok());
        assert!(Dataset::new("perf_ui_2").is_ok());
        assert!(Dataset::new("").is_err());
        assert!(Dataset::new("bad\"name").is_err());
        assert!(Dataset::new("ui data").is_err());
        assert!(Dataset::new("MAIN").is_err());
    }

    #[test]
    fn audit_marker_embeds_the_test_name() {
        let sel = ApiSelection {
            simulation: "checkout".into(),
            test_type: "load".into(),
            users: 10,
            limit: 5,
        };
        assert_eq!(sel.audit_marker(), "audit_checkout_");
    }

    #[test]
    fn defaults_differ_per_domain() {
        assert_eq!(
            MetricDomain::Api.default_thresholds(),
            ThresholdPair::new(2000, 3000)
        );
        assert_eq!(
            MetricDomain::Page.default_thresholds(),
            ThresholdPair::new(150, 1000)
        );
    }
}
