use super::qualified;
use crate::model::{Dataset, ThresholdPair};
use rusqlite::{params, Connection, OptionalExtension};

/// Stored boundaries may be REAL; they are truncated toward zero.
pub(crate) fn latest_threshold_impl(
    conn: &Connection,
    dataset: &Dataset,
    name: &str,
    group_key: &str,
) -> rusqlite::Result<Option<ThresholdPair>> {
    let sql = format!(
        "SELECT yellow, red FROM {} WHERE request_name = ?1 AND simulation = ?2 \
         ORDER BY time DESC, rowid DESC LIMIT 1",
        qualified(dataset, "threshold")
    );
    conn.query_row(&sql, params![name, group_key], |row| {
        let yellow: f64 = row.get(0)?;
        let red: f64 = row.get(1)?;
        Ok(ThresholdPair::new(yellow.trunc() as i64, red.trunc() as i64))
    })
    .optional()
}
