use serde::{Deserialize, Serialize};

/// One load-test request sample from the `api_comparison` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRow {
    pub time: i64,
    pub build_id: String,
    pub simulation: String,
    pub test_type: String,
    pub users: i64,
    pub request_name: String,
    pub total: i64,
    pub throughput: f64,
    pub ko: i64,
    pub min: f64,
    pub max: f64,
    pub pct50: f64,
    pub pct95: f64,
    pub duration: i64,
}

/// One page-load observation from the `uiperf` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiRow {
    pub build_id: String,
    pub scenario: String,
    pub suite: String,
    pub domain: String,
    pub start_time: String,
    pub page: String,
    pub status: String,
    pub url: String,
    pub latency: f64,
    pub tti: f64,
    pub ttl: f64,
    pub onload: f64,
    pub total_time: f64,
    pub transfer: f64,
    #[serde(rename = "firstPaint")]
    pub first_paint: f64,
    #[serde(rename = "encodedBodySize")]
    pub encoded_body_size: i64,
    #[serde(rename = "decodedBodySize")]
    pub decoded_body_size: i64,
}

pub(crate) fn row_to_api_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ApiRow> {
    Ok(ApiRow {
        time: row.get(0)?,
        build_id: row.get(1)?,
        simulation: row.get(2)?,
        test_type: row.get(3)?,
        users: row.get(4)?,
        request_name: row.get(5)?,
        total: row.get(6)?,
        throughput: row.get(7)?,
        ko: row.get(8)?,
        min: row.get(9)?,
        max: row.get(10)?,
        pct50: row.get(11)?,
        pct95: row.get(12)?,
        duration: row.get(13)?,
    })
}

pub(crate) const API_ROW_COLUMNS: &str = "time, build_id, simulation, test_type, users, \
     request_name, total, throughput, ko, min, max, pct50, pct95, duration";

pub(crate) fn row_to_ui_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<UiRow> {
    Ok(UiRow {
        build_id: row.get(0)?,
        scenario: row.get(1)?,
        suite: row.get(2)?,
        domain: row.get(3)?,
        start_time: row.get(4)?,
        page: row.get(5)?,
        status: row.get(6)?,
        url: row.get(7)?,
        latency: row.get(8)?,
        tti: row.get(9)?,
        ttl: row.get(10)?,
        onload: row.get(11)?,
        total_time: row.get(12)?,
        transfer: row.get(13)?,
        first_paint: row.get(14)?,
        encoded_body_size: row.get(15)?,
        decoded_body_size: row.get(16)?,
    })
}

pub(crate) const UI_ROW_COLUMNS: &str = "build_id, scenario, suite, domain, start_time, page, \
     status, url, latency, tti, ttl, onload, total_time, transfer, first_paint, \
     encoded_body_size, decoded_body_size";
