use crate::errors::ReportResult;
use crate::model::{ApiSelection, Dataset, ThresholdPair, UiSelection};
use crate::storage::rows::{ApiRow, UiRow};

/// Read access to the measurement store.
///
/// Each method is one blocking round trip against the named dataset.
pub trait MeasurementSource {
    /// Build ids for the selection, most recent first, skipping ids that
    /// contain `exclude`. At most `selection.limit` ids.
    fn recent_api_build_ids(
        &self,
        dataset: &Dataset,
        selection: &ApiSelection,
        exclude: &str,
    ) -> ReportResult<Vec<String>>;

    /// All rows of one build, in sample order.
    fn api_rows(&self, dataset: &Dataset, build_id: &str) -> ReportResult<Vec<ApiRow>>;

    /// Build id of the most recent `pct95` sample among builds whose id
    /// contains `marker`.
    fn latest_marked_api_build_id(
        &self,
        dataset: &Dataset,
        selection: &ApiSelection,
        marker: &str,
    ) -> ReportResult<Option<String>>;

    fn recent_ui_build_ids(
        &self,
        dataset: &Dataset,
        selection: &UiSelection,
        exclude: &str,
    ) -> ReportResult<Vec<String>>;

    fn ui_rows(&self, dataset: &Dataset, build_id: &str) -> ReportResult<Vec<UiRow>>;

    /// Most recently recorded threshold pair for `(name, group_key)`.
    fn latest_threshold(
        &self,
        dataset: &Dataset,
        name: &str,
        group_key: &str,
    ) -> ReportResult<Option<ThresholdPair>>;
}
