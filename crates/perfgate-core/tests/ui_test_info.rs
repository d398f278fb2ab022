use perfgate_core::model::{Dataset, Datasets, UiSelection};
use perfgate_core::severity::PageSeverity;
use perfgate_core::{ReportError, Store, TestInfoAssembler};
use rusqlite::params;

fn datasets() -> Datasets {
    Datasets {
        comparison: Dataset::new("comparison").unwrap(),
        thresholds: Dataset::new("thresholds").unwrap(),
        ui: Dataset::new("perfui").unwrap(),
    }
}

fn store(ds: &Datasets) -> Store {
    let store = Store::memory().unwrap();
    store.attach_memory(&ds.thresholds).unwrap();
    store.attach_memory(&ds.ui).unwrap();
    store
}

fn selection() -> UiSelection {
    UiSelection {
        scenario: "browse".into(),
        suite: "smoke".into(),
        limit: 5,
    }
}

fn insert_sample(
    store: &Store,
    time: i64,
    build_id: &str,
    page: &str,
    status: &str,
    total_time: f64,
    latency: f64,
) {
    store.execute_sql(
        r#"INSERT INTO "perfui".uiperf
           (time, build_id, scenario, suite, domain, start_time, page, status, url,
            latency, tti, ttl, onload, total_time, transfer, first_paint,
            encoded_body_size, decoded_body_size)
           VALUES (?1, ?2, 'browse', 'smoke', 'https://shop.example', 'run-1', ?3, ?4, ?5,
                   ?6, 300, 350, 280, ?7, 15, 90, 2048, 8192)"#,
        params![
            time,
            build_id,
            page,
            status,
            format!("/{}", page.to_lowercase()),
            latency,
            total_time
        ],
    )
    .unwrap();
}

#[test]
fn ui_test_info_reduces_and_classifies_latest_build() -> anyhow::Result<()> {
    let ds = datasets();
    let store = store(&ds);
    insert_sample(&store, 1, "u1", "Home", "ok", 900.0, 10.0);
    insert_sample(&store, 10, "u2", "Home", "ok", 100.0, 10.0);
    insert_sample(&store, 11, "u2", "Cart", "ko", 2000.0, 100.0);
    insert_sample(&store, 12, "u2", "Home", "ko", 200.0, 20.0);
    insert_sample(&store, 13, "u2", "Cart", "ok", 400.0, 100.0);

    let info = TestInfoAssembler::new(&store, &ds).ui_test_info(&selection())?;

    assert_eq!(info.build_ids, ["u2", "u1"]);
    assert_eq!(info.tests_data.len(), 2);
    assert_eq!(info.tests_data[1].len(), 1);

    let latest = &info.last_test_data;
    assert_eq!(latest.len(), 2);

    let home = &latest[0];
    assert_eq!(home.page.request_name, "Home");
    assert_eq!(home.page.count, 2);
    assert_eq!(home.page.failed, 1);
    assert_eq!(home.page.url, "https://shop.example/home");
    assert_eq!(home.time, 135.0);
    assert_eq!(
        (home.yellow_threshold_value, home.red_threshold_value),
        (150, 1000)
    );
    assert_eq!(home.time_threshold, PageSeverity::Green);

    // median(total_time) = 1200, median(latency) = 100
    let cart = &latest[1];
    assert_eq!(cart.page.request_name, "Cart");
    assert_eq!(cart.time, 1100.0);
    assert_eq!(cart.time_threshold, PageSeverity::Red);
    Ok(())
}

#[test]
fn page_thresholds_are_keyed_by_page_and_scenario() -> anyhow::Result<()> {
    let ds = datasets();
    let store = store(&ds);
    insert_sample(&store, 1, "u1", "Home", "ok", 100.0, 10.0);
    insert_sample(&store, 2, "u1", "Home", "ok", 200.0, 20.0);
    store.execute_sql(
        r#"INSERT INTO "thresholds".threshold(time, request_name, simulation, yellow, red)
           VALUES (1, 'Home', 'browse', 100, 500)"#,
        [],
    )?;

    let info = TestInfoAssembler::new(&store, &ds).ui_test_info(&selection())?;
    let home = &info.last_test_data[0];
    assert_eq!(home.time, 135.0);
    assert_eq!(home.time_threshold, PageSeverity::Orange);
    Ok(())
}

#[test]
fn ui_selection_skips_audit_builds_and_other_suites() -> anyhow::Result<()> {
    let ds = datasets();
    let store = store(&ds);
    insert_sample(&store, 1, "u1", "Home", "ok", 100.0, 10.0);
    insert_sample(&store, 5, "audit_browse_1", "Home", "ok", 100.0, 10.0);
    store.execute_sql(
        r#"INSERT INTO "perfui".uiperf(time, build_id, scenario, suite, page)
           VALUES (9, 'nightly_7', 'browse', 'regression', 'Home')"#,
        [],
    )?;

    let info = TestInfoAssembler::new(&store, &ds).ui_test_info(&selection())?;
    assert_eq!(info.build_ids, ["u1"]);
    Ok(())
}

#[test]
fn ui_without_builds_is_no_data() {
    let ds = datasets();
    let store = store(&ds);
    let err = TestInfoAssembler::new(&store, &ds)
        .ui_test_info(&selection())
        .expect_err("empty dataset");
    assert!(matches!(err, ReportError::NoData { .. }));
    assert!(err.to_string().contains("scenario=browse suite=smoke"));
}
