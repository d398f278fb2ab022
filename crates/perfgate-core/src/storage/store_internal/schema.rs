//! Table layout of a measurement dataset.

use crate::model::Dataset;
use rusqlite::Connection;
use std::collections::HashSet;

pub(crate) const TABLES: [&str; 3] = ["api_comparison", "threshold", "uiperf"];

pub(crate) fn init_schema_impl(conn: &Connection, dataset: &Dataset) -> rusqlite::Result<()> {
    let ds = dataset.as_str();
    conn.execute_batch(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS "{ds}".api_comparison (
            time INTEGER NOT NULL,
            build_id TEXT NOT NULL,
            simulation TEXT NOT NULL,
            test_type TEXT NOT NULL,
            users INTEGER NOT NULL,
            request_name TEXT NOT NULL,
            total INTEGER NOT NULL DEFAULT 0,
            throughput REAL NOT NULL DEFAULT 0,
            ko INTEGER NOT NULL DEFAULT 0,
            min REAL NOT NULL DEFAULT 0,
            max REAL NOT NULL DEFAULT 0,
            pct50 REAL NOT NULL DEFAULT 0,
            pct95 REAL NOT NULL DEFAULT 0,
            duration INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS "{ds}".idx_api_comparison_build ON api_comparison(build_id);
        CREATE INDEX IF NOT EXISTS "{ds}".idx_api_comparison_selection
            ON api_comparison(simulation, test_type, users, time);

        CREATE TABLE IF NOT EXISTS "{ds}".threshold (
            time INTEGER NOT NULL,
            request_name TEXT NOT NULL,
            simulation TEXT NOT NULL,
            yellow REAL NOT NULL,
            red REAL NOT NULL
        );
        CREATE INDEX IF NOT EXISTS "{ds}".idx_threshold_key ON threshold(request_name, simulation);

        CREATE TABLE IF NOT EXISTS "{ds}".uiperf (
            time INTEGER NOT NULL,
            build_id TEXT NOT NULL,
            scenario TEXT NOT NULL,
            suite TEXT NOT NULL,
            domain TEXT NOT NULL DEFAULT '',
            start_time TEXT NOT NULL DEFAULT '',
            page TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'ok',
            url TEXT NOT NULL DEFAULT '',
            latency REAL NOT NULL DEFAULT 0,
            tti REAL NOT NULL DEFAULT 0,
            ttl REAL NOT NULL DEFAULT 0,
            onload REAL NOT NULL DEFAULT 0,
            total_time REAL NOT NULL DEFAULT 0,
            transfer REAL NOT NULL DEFAULT 0,
            first_paint REAL NOT NULL DEFAULT 0,
            encoded_body_size INTEGER NOT NULL DEFAULT 0,
            decoded_body_size INTEGER NOT NULL DEFAULT 0
        );
        CREATE INDEX IF NOT EXISTS "{ds}".idx_uiperf_build ON uiperf(build_id);
        "#
    ))
}

/// Tables present in the dataset.
pub(crate) fn existing_tables_impl(
    conn: &Connection,
    dataset: &Dataset,
) -> rusqlite::Result<HashSet<String>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT name FROM \"{}\".sqlite_master WHERE type = 'table'",
        dataset.as_str()
    ))?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}
