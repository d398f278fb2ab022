use super::rows::{ApiRow, UiRow};
use super::store_internal::{api, schema, thresholds, ui};
use crate::errors::{ReportError, ReportResult};
use crate::model::{ApiSelection, Dataset, ThresholdPair, UiSelection};
use crate::source::MeasurementSource;
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// SQLite-backed measurement store.
///
/// The main database is an in-memory scratch schema. Each named dataset lives
/// in its own file `<dir>/<name>.db` and is attached under its own schema name
/// the first time a read references it.
pub struct Store {
    pub(crate) conn: Arc<Mutex<Connection>>,
    dir: Option<PathBuf>,
    attached: Mutex<HashSet<Dataset>>,
}

impl Store {
    /// Store resolving datasets as files under `dir`.
    pub fn open_dir(dir: impl Into<PathBuf>) -> ReportResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            dir: Some(dir.into()),
            attached: Mutex::new(HashSet::new()),
        })
    }

    /// Store with no backing directory; datasets must be attached with
    /// [`Store::attach_memory`].
    pub fn memory() -> ReportResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            dir: None,
            attached: Mutex::new(HashSet::new()),
        })
    }

    pub fn dataset_path(&self, dataset: &Dataset) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.db", dataset.as_str())))
    }

    /// Attach an empty in-memory dataset with the full table layout.
    pub fn attach_memory(&self, dataset: &Dataset) -> ReportResult<()> {
        let mut attached = lock(&self.attached);
        if attached.contains(dataset) {
            return Ok(());
        }
        let conn = lock(&self.conn);
        attach(&conn, Path::new(":memory:"), dataset)?;
        schema::init_schema_impl(&conn, dataset)?;
        attached.insert(dataset.clone());
        Ok(())
    }

    /// Create the dataset file if needed and make sure all tables exist.
    ///
    /// Returns the tables that were created.
    pub fn init_dataset(&self, dataset: &Dataset) -> ReportResult<Vec<String>> {
        let mut attached = lock(&self.attached);
        let conn = lock(&self.conn);
        if !attached.contains(dataset) {
            let path = self
                .dataset_path(dataset)
                .ok_or_else(|| ReportError::DatasetNotAttached {
                    name: dataset.to_string(),
                })?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            attach(&conn, &path, dataset)?;
            attached.insert(dataset.clone());
        }

        let before = schema::existing_tables_impl(&conn, dataset)?;
        schema::init_schema_impl(&conn, dataset)?;
        let created: Vec<String> = schema::TABLES
            .iter()
            .filter(|t| !before.contains(**t))
            .map(|t| t.to_string())
            .collect();
        tracing::info!(dataset = %dataset, created = ?created, "dataset schema ready");
        Ok(created)
    }

    /// Execute one statement against the connection, e.g. to seed an
    /// attached dataset. Tables must be schema-qualified.
    #[doc(hidden)]
    pub fn execute_sql<P: rusqlite::Params>(&self, sql: &str, params: P) -> ReportResult<usize> {
        Ok(lock(&self.conn).execute(sql, params)?)
    }

    #[doc(hidden)]
    pub fn execute_batch(&self, sql: &str) -> ReportResult<()> {
        Ok(lock(&self.conn).execute_batch(sql)?)
    }

    /// Run `f` against the connection once `dataset` is attached.
    ///
    /// Readers never create dataset files; a missing file is an error.
    fn with_dataset<T>(
        &self,
        dataset: &Dataset,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> ReportResult<T> {
        let mut attached = lock(&self.attached);
        let conn = lock(&self.conn);
        if !attached.contains(dataset) {
            let path = self
                .dataset_path(dataset)
                .ok_or_else(|| ReportError::DatasetNotAttached {
                    name: dataset.to_string(),
                })?;
            if !path.is_file() {
                return Err(ReportError::DatasetMissing {
                    name: dataset.to_string(),
                    path,
                });
            }
            attach(&conn, &path, dataset)?;
            tracing::debug!(dataset = %dataset, path = %path.display(), "attached dataset");
            attached.insert(dataset.clone());
        }
        Ok(f(&conn)?)
    }
}

fn attach(conn: &Connection, path: &Path, dataset: &Dataset) -> rusqlite::Result<()> {
    conn.execute(
        &format!("ATTACH DATABASE ?1 AS \"{}\"", dataset.as_str()),
        params![path.to_string_lossy().into_owned()],
    )?;
    Ok(())
}

/// Store access is single-threaded per request; a poisoned lock still holds a
/// usable connection.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MeasurementSource for Store {
    fn recent_api_build_ids(
        &self,
        dataset: &Dataset,
        selection: &ApiSelection,
        exclude: &str,
    ) -> ReportResult<Vec<String>> {
        self.with_dataset(dataset, |conn| {
            api::recent_build_ids_impl(conn, dataset, selection, exclude)
        })
    }

    fn api_rows(&self, dataset: &Dataset, build_id: &str) -> ReportResult<Vec<ApiRow>> {
        self.with_dataset(dataset, |conn| {
            api::rows_for_build_impl(conn, dataset, build_id)
        })
    }

    fn latest_marked_api_build_id(
        &self,
        dataset: &Dataset,
        selection: &ApiSelection,
        marker: &str,
    ) -> ReportResult<Option<String>> {
        self.with_dataset(dataset, |conn| {
            api::latest_marked_build_id_impl(conn, dataset, selection, marker)
        })
    }

    fn recent_ui_build_ids(
        &self,
        dataset: &Dataset,
        selection: &UiSelection,
        exclude: &str,
    ) -> ReportResult<Vec<String>> {
        self.with_dataset(dataset, |conn| {
            ui::recent_build_ids_impl(conn, dataset, selection, exclude)
        })
    }

    fn ui_rows(&self, dataset: &Dataset, build_id: &str) -> ReportResult<Vec<UiRow>> {
        self.with_dataset(dataset, |conn| ui::rows_for_build_impl(conn, dataset, build_id))
    }

    fn latest_threshold(
        &self,
        dataset: &Dataset,
        name: &str,
        group_key: &str,
    ) -> ReportResult<Option<ThresholdPair>> {
        self.with_dataset(dataset, |conn| {
            thresholds::latest_threshold_impl(conn, dataset, name, group_key)
        })
    }
}
