//! Reads against the `uiperf` table.

use super::qualified;
use crate::model::{Dataset, UiSelection};
use crate::storage::rows::{row_to_ui_row, UiRow, UI_ROW_COLUMNS};
use rusqlite::{params, Connection};

pub(crate) fn recent_build_ids_impl(
    conn: &Connection,
    dataset: &Dataset,
    selection: &UiSelection,
    exclude: &str,
) -> rusqlite::Result<Vec<String>> {
    let sql = format!(
        "SELECT build_id, MAX(time) AS last_seen FROM {} \
         WHERE scenario = ?1 AND suite = ?2 AND instr(build_id, ?3) = 0 \
         GROUP BY build_id \
         ORDER BY last_seen DESC, MAX(rowid) DESC \
         LIMIT ?4",
        qualified(dataset, "uiperf")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![selection.scenario, selection.suite, exclude, selection.limit],
        |row| row.get::<_, String>(0),
    )?;
    rows.collect()
}

pub(crate) fn rows_for_build_impl(
    conn: &Connection,
    dataset: &Dataset,
    build_id: &str,
) -> rusqlite::Result<Vec<UiRow>> {
    let sql = format!(
        "SELECT {UI_ROW_COLUMNS} FROM {} WHERE build_id = ?1 ORDER BY time ASC, rowid ASC",
        qualified(dataset, "uiperf")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![build_id], row_to_ui_row)?;
    rows.collect()
}
