//! Selection of recent builds and of the audit baseline.

use crate::errors::{ReportError, ReportResult};
use crate::model::{ApiSelection, Dataset, UiSelection};
use crate::source::MeasurementSource;
use crate::storage::rows::{ApiRow, UiRow};
use std::collections::HashSet;

/// One build and its raw rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Build<R> {
    pub build_id: String,
    pub rows: Vec<R>,
}

/// Most recent non-audit API builds, newest first, each with its rows.
///
/// Fails with [`ReportError::NoData`] when no build matches.
pub fn select_recent_api_builds<S: MeasurementSource + ?Sized>(
    source: &S,
    dataset: &Dataset,
    selection: &ApiSelection,
) -> ReportResult<Vec<Build<ApiRow>>> {
    let ids = source.recent_api_build_ids(dataset, selection, &selection.audit_marker())?;
    let ids = dedup_preserving_order(ids);
    if ids.is_empty() {
        return Err(ReportError::no_data(selection.to_string()));
    }
    tracing::info!(%selection, builds = ids.len(), "selected recent api builds");

    let mut builds = Vec::with_capacity(ids.len());
    for build_id in ids {
        let rows = source.api_rows(dataset, &build_id)?;
        tracing::debug!(build_id = %build_id, rows = rows.len(), "fetched api build");
        builds.push(Build { build_id, rows });
    }
    Ok(builds)
}

/// UI counterpart of [`select_recent_api_builds`].
pub fn select_recent_ui_builds<S: MeasurementSource + ?Sized>(
    source: &S,
    dataset: &Dataset,
    selection: &UiSelection,
) -> ReportResult<Vec<Build<UiRow>>> {
    let ids = source.recent_ui_build_ids(dataset, selection, &selection.audit_marker())?;
    let ids = dedup_preserving_order(ids);
    if ids.is_empty() {
        return Err(ReportError::no_data(selection.to_string()));
    }
    tracing::info!(%selection, builds = ids.len(), "selected recent ui builds");

    let mut builds = Vec::with_capacity(ids.len());
    for build_id in ids {
        let rows = source.ui_rows(dataset, &build_id)?;
        tracing::debug!(build_id = %build_id, rows = rows.len(), "fetched ui build");
        builds.push(Build { build_id, rows });
    }
    Ok(builds)
}

/// Rows of the audit build holding the newest `pct95` sample, or `None` when
/// the selection has no audit build.
pub fn select_baseline<S: MeasurementSource + ?Sized>(
    source: &S,
    dataset: &Dataset,
    selection: &ApiSelection,
) -> ReportResult<Option<Build<ApiRow>>> {
    let marker = selection.audit_marker();
    let Some(build_id) = source.latest_marked_api_build_id(dataset, selection, &marker)? else {
        tracing::warn!(%selection, marker = %marker, "baseline not found");
        return Ok(None);
    };
    let rows = source.api_rows(dataset, &build_id)?;
    tracing::info!(build_id = %build_id, rows = rows.len(), "selected baseline build");
    Ok(Some(Build { build_id, rows }))
}

fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let ids = ["b3", "b2", "b3", "b1", "b2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(dedup_preserving_order(ids), ["b3", "b2", "b1"]);
    }
}
