//! Build-level test info: recent builds, the enriched latest build, and the
//! audit baseline.

use crate::aggregate::{reduce_pages, PageRecord};
use crate::errors::ReportResult;
use crate::model::{ApiSelection, Datasets, MetricDomain, UiSelection};
use crate::select::{select_baseline, select_recent_api_builds, select_recent_ui_builds};
use crate::severity::{PageSeverity, Severity};
use crate::source::MeasurementSource;
use crate::storage::rows::ApiRow;
use crate::thresholds::ThresholdResolver;
use serde::{Deserialize, Serialize};

/// One request of the latest API build with its severities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSummary {
    pub request_name: String,
    pub total: i64,
    pub throughput: f64,
    pub ko: i64,
    pub min: f64,
    pub max: f64,
    pub pct50: f64,
    pub pct95: f64,
    pub time: i64,
    pub simulation: String,
    pub users: i64,
    pub duration: i64,
    pub min_threshold: Severity,
    pub max_threshold: Severity,
    pub pct50_threshold: Severity,
    pub pct95_threshold: Severity,
    pub yellow_threshold_value: i64,
    pub red_threshold_value: i64,
}

impl ApiSummary {
    pub fn severities(&self) -> [Severity; 4] {
        [
            self.min_threshold,
            self.max_threshold,
            self.pct50_threshold,
            self.pct95_threshold,
        ]
    }
}

/// One page of the latest UI build with its page-time severity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    #[serde(flatten)]
    pub page: PageRecord,
    pub time: f64,
    pub time_threshold: PageSeverity,
    pub yellow_threshold_value: i64,
    pub red_threshold_value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiTestInfo {
    pub build_ids: Vec<String>,
    pub tests_data: Vec<Vec<ApiRow>>,
    pub last_test_data: Vec<ApiSummary>,
    pub baseline_build_id: Option<String>,
    pub baseline: Option<Vec<ApiRow>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiTestInfo {
    pub build_ids: Vec<String>,
    pub tests_data: Vec<Vec<PageRecord>>,
    pub last_test_data: Vec<PageSummary>,
}

pub fn enrich_api_rows<S: MeasurementSource + ?Sized>(
    resolver: &ThresholdResolver<'_, S>,
    rows: &[ApiRow],
) -> ReportResult<Vec<ApiSummary>> {
    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let pair = resolver.resolve(&row.request_name, &row.simulation, MetricDomain::Api)?;
        out.push(ApiSummary {
            request_name: row.request_name.clone(),
            total: row.total,
            throughput: row.throughput,
            ko: row.ko,
            min: row.min,
            max: row.max,
            pct50: row.pct50,
            pct95: row.pct95,
            time: row.time,
            simulation: row.simulation.clone(),
            users: row.users,
            duration: row.duration,
            min_threshold: Severity::classify(row.min, pair),
            max_threshold: Severity::classify(row.max, pair),
            pct50_threshold: Severity::classify(row.pct50, pair),
            pct95_threshold: Severity::classify(row.pct95, pair),
            yellow_threshold_value: pair.yellow,
            red_threshold_value: pair.red,
        });
    }
    Ok(out)
}

pub fn enrich_pages<S: MeasurementSource + ?Sized>(
    resolver: &ThresholdResolver<'_, S>,
    pages: &[PageRecord],
) -> ReportResult<Vec<PageSummary>> {
    let mut out = Vec::with_capacity(pages.len());
    for page in pages {
        let pair = resolver.resolve(&page.request_name, &page.scenario, MetricDomain::Page)?;
        let time = page.page_time()?;
        out.push(PageSummary {
            page: page.clone(),
            time,
            time_threshold: PageSeverity::classify(time, pair),
            yellow_threshold_value: pair.yellow,
            red_threshold_value: pair.red,
        });
    }
    Ok(out)
}

/// Runs the selection and enrichment steps against one source.
///
/// Every step is a sequential blocking read; nothing is cached between calls.
pub struct TestInfoAssembler<'a, S: MeasurementSource + ?Sized> {
    source: &'a S,
    datasets: &'a Datasets,
}

impl<'a, S: MeasurementSource + ?Sized> TestInfoAssembler<'a, S> {
    pub fn new(source: &'a S, datasets: &'a Datasets) -> Self {
        Self { source, datasets }
    }

    pub fn api_test_info(&self, selection: &ApiSelection) -> ReportResult<ApiTestInfo> {
        let builds = select_recent_api_builds(self.source, &self.datasets.comparison, selection)?;

        let resolver = ThresholdResolver::new(self.source, &self.datasets.thresholds);
        let last_test_data = match builds.first() {
            Some(latest) => enrich_api_rows(&resolver, &latest.rows)?,
            None => Vec::new(),
        };

        let baseline = select_baseline(self.source, &self.datasets.comparison, selection)?;

        let (build_ids, tests_data): (Vec<String>, Vec<Vec<ApiRow>>) =
            builds.into_iter().map(|b| (b.build_id, b.rows)).unzip();
        let (baseline_build_id, baseline) = match baseline {
            Some(b) => (Some(b.build_id), Some(b.rows)),
            None => (None, None),
        };
        Ok(ApiTestInfo {
            build_ids,
            tests_data,
            last_test_data,
            baseline_build_id,
            baseline,
        })
    }

    pub fn ui_test_info(&self, selection: &UiSelection) -> ReportResult<UiTestInfo> {
        let builds = select_recent_ui_builds(self.source, &self.datasets.ui, selection)?;

        let mut build_ids = Vec::with_capacity(builds.len());
        let mut tests_data = Vec::with_capacity(builds.len());
        for build in builds {
            tests_data.push(reduce_pages(&build.rows));
            build_ids.push(build.build_id);
        }

        let resolver = ThresholdResolver::new(self.source, &self.datasets.thresholds);
        let last_test_data = match tests_data.first() {
            Some(latest) => enrich_pages(&resolver, latest)?,
            None => Vec::new(),
        };

        Ok(UiTestInfo {
            build_ids,
            tests_data,
            last_test_data,
        })
    }
}
