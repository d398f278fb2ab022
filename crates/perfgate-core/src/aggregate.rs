//! Per-page aggregation of UI samples within one build.

use crate::errors::{ReportError, ReportResult};
use crate::storage::rows::UiRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const FAILED_STATUS: &str = "ko";

/// All samples of one page in one build.
///
/// Every sample list has exactly `count` entries, in sample order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub request_name: String,
    pub scenario: String,
    pub suite: String,
    pub build_id: String,
    pub start_time: String,
    pub url: String,
    pub count: u32,
    pub failed: u32,
    pub total_time: Vec<f64>,
    pub ttl: Vec<f64>,
    pub tti: Vec<f64>,
    pub onload: Vec<f64>,
    pub latency: Vec<f64>,
    pub transfer: Vec<f64>,
    #[serde(rename = "encodedBodySize")]
    pub encoded_body_size: i64,
    #[serde(rename = "decodedBodySize")]
    pub decoded_body_size: i64,
}

impl PageRecord {
    /// `median(total_time) - median(latency)`; may be negative.
    pub fn page_time(&self) -> ReportResult<f64> {
        let total = median(&self.total_time).ok_or_else(|| self.empty("total_time"))?;
        let latency = median(&self.latency).ok_or_else(|| self.empty("latency"))?;
        Ok(total - latency)
    }

    fn empty(&self, metric: &'static str) -> ReportError {
        ReportError::EmptySamples {
            page: self.request_name.clone(),
            metric,
        }
    }
}

struct PageBuilder {
    record: PageRecord,
}

impl PageBuilder {
    fn start(row: &UiRow) -> Self {
        Self {
            record: PageRecord {
                request_name: row.page.clone(),
                scenario: row.scenario.clone(),
                suite: row.suite.clone(),
                build_id: row.build_id.clone(),
                start_time: row.start_time.clone(),
                url: format!("{}{}", row.domain, row.url),
                count: 1,
                failed: u32::from(row.status == FAILED_STATUS),
                total_time: vec![row.total_time],
                ttl: vec![row.ttl],
                tti: vec![row.tti],
                onload: vec![row.onload],
                latency: vec![row.latency],
                transfer: vec![row.transfer],
                encoded_body_size: row.encoded_body_size,
                decoded_body_size: row.decoded_body_size,
            },
        }
    }

    fn push(&mut self, row: &UiRow) {
        let r = &mut self.record;
        r.total_time.push(row.total_time);
        r.ttl.push(row.ttl);
        r.tti.push(row.tti);
        r.onload.push(row.onload);
        r.latency.push(row.latency);
        r.transfer.push(row.transfer);
        r.count += 1;
        if row.status == FAILED_STATUS {
            r.failed += 1;
        }
    }
}

/// Merge one build's rows into one record per page, in first-seen page order.
///
/// Scalars (url, sizes, start time) come from the first row of each page.
pub fn reduce_pages(rows: &[UiRow]) -> Vec<PageRecord> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut builders: Vec<PageBuilder> = Vec::new();

    for row in rows {
        match index.get(row.page.as_str()) {
            Some(&i) => builders[i].push(row),
            None => {
                index.insert(row.page.as_str(), builders.len());
                builders.push(PageBuilder::start(row));
            }
        }
    }

    builders.into_iter().map(|b| b.record).collect()
}

/// Median with the even-length case averaged; `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if !sorted.len().is_multiple_of(2) {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
