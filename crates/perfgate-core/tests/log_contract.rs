//! Missing baseline and threshold defaults are reported through logs, not errors.

use perfgate_core::model::{ApiSelection, Dataset, Datasets};
use perfgate_core::{Store, TestInfoAssembler};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct MockWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for MockWriter {
    type Writer = MockWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn setup_capture() -> (MockWriter, tracing::subscriber::DefaultGuard) {
    let writer = MockWriter {
        buf: Arc::new(Mutex::new(Vec::new())),
    };
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .json()
        .finish();
    (writer, tracing::subscriber::set_default(subscriber))
}

fn events(writer: &MockWriter) -> Vec<serde_json::Value> {
    let output = String::from_utf8(writer.buf.lock().unwrap().clone()).unwrap();
    output
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect()
}

#[test]
fn missing_baseline_warns_and_defaults_are_debug_only() -> anyhow::Result<()> {
    let (writer, _guard) = setup_capture();

    let ds = Datasets {
        comparison: Dataset::new("comparison")?,
        thresholds: Dataset::new("thresholds")?,
        ui: Dataset::new("perfui")?,
    };
    let store = Store::memory()?;
    store.attach_memory(&ds.comparison)?;
    store.attach_memory(&ds.thresholds)?;
    store.execute_sql(
        r#"INSERT INTO "comparison".api_comparison
           (time, build_id, simulation, test_type, users, request_name, min, max, pct50, pct95)
           VALUES (1, 'b1', 'sim', 'load', 10, 'Login', 100, 200, 150, 180)"#,
        [],
    )?;

    let sel = ApiSelection {
        simulation: "sim".into(),
        test_type: "load".into(),
        users: 10,
        limit: 5,
    };
    let info = TestInfoAssembler::new(&store, &ds).api_test_info(&sel)?;
    assert!(info.baseline.is_none());

    let events = events(&writer);
    let level_of = |msg: &str| {
        events
            .iter()
            .find(|e| e["fields"]["message"] == msg)
            .and_then(|e| e["level"].as_str().map(str::to_string))
    };
    assert_eq!(level_of("baseline not found").as_deref(), Some("WARN"));
    assert_eq!(
        level_of("no threshold configured; using defaults").as_deref(),
        Some("DEBUG")
    );
    assert!(
        !events.iter().any(|e| e["level"] == "ERROR"),
        "nothing in a successful run is logged as an error"
    );
    Ok(())
}
