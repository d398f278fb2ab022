//! Reads against the `api_comparison` table.

use super::qualified;
use crate::model::{ApiSelection, Dataset};
use crate::storage::rows::{row_to_api_row, ApiRow, API_ROW_COLUMNS};
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) fn recent_build_ids_impl(
    conn: &Connection,
    dataset: &Dataset,
    selection: &ApiSelection,
    exclude: &str,
) -> rusqlite::Result<Vec<String>> {
    let sql = format!(
        "SELECT build_id, MAX(time) AS last_seen FROM {} \
         WHERE simulation = ?1 AND test_type = ?2 AND users = ?3 AND instr(build_id, ?4) = 0 \
         GROUP BY build_id \
         ORDER BY last_seen DESC, MAX(rowid) DESC \
         LIMIT ?5",
        qualified(dataset, "api_comparison")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![
            selection.simulation,
            selection.test_type,
            selection.users,
            exclude,
            selection.limit
        ],
        |row| row.get::<_, String>(0),
    )?;
    rows.collect()
}

pub(crate) fn rows_for_build_impl(
    conn: &Connection,
    dataset: &Dataset,
    build_id: &str,
) -> rusqlite::Result<Vec<ApiRow>> {
    let sql = format!(
        "SELECT {API_ROW_COLUMNS} FROM {} WHERE build_id = ?1 ORDER BY time ASC, rowid ASC",
        qualified(dataset, "api_comparison")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![build_id], row_to_api_row)?;
    rows.collect()
}

/// Build id carried by the newest `pct95` sample among marked builds.
pub(crate) fn latest_marked_build_id_impl(
    conn: &Connection,
    dataset: &Dataset,
    selection: &ApiSelection,
    marker: &str,
) -> rusqlite::Result<Option<String>> {
    let sql = format!(
        "SELECT build_id FROM {} \
         WHERE simulation = ?1 AND test_type = ?2 AND users = ?3 AND instr(build_id, ?4) > 0 \
         AND pct95 IS NOT NULL \
         ORDER BY time DESC, rowid DESC \
         LIMIT 1",
        qualified(dataset, "api_comparison")
    );
    conn.query_row(
        &sql,
        params![
            selection.simulation,
            selection.test_type,
            selection.users,
            marker
        ],
        |row| row.get::<_, String>(0),
    )
    .optional()
}
