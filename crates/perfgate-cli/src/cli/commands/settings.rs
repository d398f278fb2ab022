//! Config file plus flag overrides.

use super::super::args::{OutputFormat, StoreArgs};
use anyhow::Context;
use perfgate_core::config::ReportConfig;
use perfgate_core::{Datasets, Store};
use std::path::Path;

pub struct Settings {
    pub config: ReportConfig,
    pub datasets: Datasets,
}

impl Settings {
    pub fn load(args: &StoreArgs) -> anyhow::Result<Self> {
        let mut config = ReportConfig::load(&args.config)?;
        if let Some(dir) = &args.store_dir {
            config.store.dir = dir.clone();
        }
        if let Some(name) = &args.comparison_dataset {
            config.datasets.comparison = name.clone();
        }
        if let Some(name) = &args.thresholds_dataset {
            config.datasets.thresholds = name.clone();
        }
        if let Some(name) = &args.ui_dataset {
            config.datasets.ui = name.clone();
        }
        config.validate()?;
        let datasets = config.datasets.resolve()?;
        tracing::debug!(
            store_dir = %config.store.dir.display(),
            comparison = %datasets.comparison,
            thresholds = %datasets.thresholds,
            ui = %datasets.ui,
            "settings resolved"
        );
        Ok(Self { config, datasets })
    }

    pub fn open_store(&self) -> anyhow::Result<Store> {
        Ok(Store::open_dir(&self.config.store.dir)?)
    }

    pub fn limit(&self, flag: Option<u32>) -> anyhow::Result<u32> {
        match flag {
            Some(0) => anyhow::bail!("--limit must be at least 1"),
            Some(n) => Ok(n),
            None => Ok(self.config.test_limit),
        }
    }
}

/// Print the rendered report, or write it to `out`.
pub fn emit(rendered: &str, out: Option<&Path>, format: &OutputFormat) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            perfgate_core::report::json::write_report(rendered, path)
                .with_context(|| format!("failed to write report {}", path.display()))?;
            tracing::info!(path = %path.display(), format = ?format, "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
