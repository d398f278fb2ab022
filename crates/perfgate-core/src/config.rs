use crate::errors::{ReportError, ReportResult};
use crate::model::{Dataset, Datasets};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "perfgate.yaml";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub store: StoreConfig,
    pub datasets: DatasetNames,

    /// Number of recent builds returned per report.
    pub test_limit: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            datasets: DatasetNames::default(),
            test_limit: 5,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one `<dataset>.db` file per dataset.
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".perfgate"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetNames {
    pub comparison: String,
    pub thresholds: String,
    pub ui: String,
}

impl Default for DatasetNames {
    fn default() -> Self {
        Self {
            comparison: "comparison".to_string(),
            thresholds: "thresholds".to_string(),
            ui: "perfui".to_string(),
        }
    }
}

impl DatasetNames {
    pub fn resolve(&self) -> ReportResult<Datasets> {
        Ok(Datasets {
            comparison: Dataset::new(&self.comparison)?,
            thresholds: Dataset::new(&self.thresholds)?,
            ui: Dataset::new(&self.ui)?,
        })
    }
}

impl ReportConfig {
    pub fn from_yaml(content: &str) -> ReportResult<Self> {
        let cfg: ReportConfig = serde_yaml::from_str(content)
            .map_err(|e| ReportError::config(format!("failed to parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> ReportResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content).map_err(|e| match e {
                ReportError::Config { message } => {
                    ReportError::config(format!("{}: {message}", path.display()))
                }
                other => other,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found; using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ReportError::config(format!(
                "cannot read {}: {e}",
                path.display()
            ))),
        }
    }

    pub fn validate(&self) -> ReportResult<()> {
        if self.test_limit == 0 {
            return Err(ReportError::config("test_limit must be at least 1"));
        }
        self.datasets.resolve()?;
        Ok(())
    }
}
