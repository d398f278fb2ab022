//! Plain-text summaries for terminals and CI logs. Deterministic, unit-testable.

use crate::assemble::{ApiSummary, ApiTestInfo, PageSummary, UiTestInfo};
use crate::severity::{PageSeverity, Severity};
use std::fmt::Write;

#[must_use]
pub fn format_api_line(s: &ApiSummary) -> String {
    format!(
        "  {:<32} min={} [{}]  max={} [{}]  pct50={} [{}]  pct95={} [{}]  (yellow {}, red {})",
        s.request_name,
        s.min,
        s.min_threshold,
        s.max,
        s.max_threshold,
        s.pct50,
        s.pct50_threshold,
        s.pct95,
        s.pct95_threshold,
        s.yellow_threshold_value,
        s.red_threshold_value
    )
}

#[must_use]
pub fn format_page_line(s: &PageSummary) -> String {
    format!(
        "  {:<32} time={:.1} [{}]  samples={} failed={}  (yellow {}, red {})",
        s.page.request_name,
        s.time,
        s.time_threshold,
        s.page.count,
        s.page.failed,
        s.yellow_threshold_value,
        s.red_threshold_value
    )
}

#[must_use]
pub fn format_api_summary(info: &ApiTestInfo) -> String {
    let mut out = String::new();
    let latest = info.build_ids.first().map(String::as_str).unwrap_or("-");
    let baseline = info.baseline_build_id.as_deref().unwrap_or("none");
    let _ = writeln!(
        out,
        "Build {latest} ({} recent builds, baseline {baseline})",
        info.build_ids.len()
    );
    let mut tally = [0usize; 3];
    for s in &info.last_test_data {
        let _ = writeln!(out, "{}", format_api_line(s));
        for sev in s.severities() {
            tally[match sev {
                Severity::Green => 0,
                Severity::Yellow => 1,
                Severity::Red => 2,
            }] += 1;
        }
    }
    let _ = writeln!(
        out,
        "Severity: {} green, {} yellow, {} red",
        tally[0], tally[1], tally[2]
    );
    out
}

#[must_use]
pub fn format_ui_summary(info: &UiTestInfo) -> String {
    let mut out = String::new();
    let latest = info.build_ids.first().map(String::as_str).unwrap_or("-");
    let _ = writeln!(
        out,
        "Build {latest} ({} recent builds)",
        info.build_ids.len()
    );
    let mut tally = [0usize; 3];
    for s in &info.last_test_data {
        let _ = writeln!(out, "{}", format_page_line(s));
        tally[match s.time_threshold {
            PageSeverity::Green => 0,
            PageSeverity::Orange => 1,
            PageSeverity::Red => 2,
        }] += 1;
    }
    let _ = writeln!(
        out,
        "Severity: {} green, {} orange, {} red",
        tally[0], tally[1], tally[2]
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::PageRecord;

    fn api_summary(name: &str, pct95: f64, sev: Severity) -> ApiSummary {
        ApiSummary {
            request_name: name.into(),
            total: 10,
            throughput: 1.5,
            ko: 0,
            min: 100.0,
            max: 900.0,
            pct50: 300.0,
            pct95,
            time: 1,
            simulation: "checkout".into(),
            users: 10,
            duration: 60,
            min_threshold: Severity::Green,
            max_threshold: Severity::Green,
            pct50_threshold: Severity::Green,
            pct95_threshold: sev,
            yellow_threshold_value: 1000,
            red_threshold_value: 2000,
        }
    }

    #[test]
    fn api_summary_counts_every_metric() {
        let info = ApiTestInfo {
            build_ids: vec!["b3".into(), "b2".into()],
            tests_data: vec![vec![], vec![]],
            last_test_data: vec![
                api_summary("Login", 1500.0, Severity::Yellow),
                api_summary("Search", 2500.0, Severity::Red),
            ],
            baseline_build_id: None,
            baseline: None,
        };
        let text = format_api_summary(&info);
        assert!(text.starts_with("Build b3 (2 recent builds, baseline none)\n"));
        assert!(text.contains("pct95=1500 [YELLOW]"));
        assert!(text.ends_with("Severity: 6 green, 1 yellow, 1 red\n"));
    }

    #[test]
    fn page_line_shows_time_and_failures() {
        let summary = PageSummary {
            page: PageRecord {
                request_name: "Home".into(),
                scenario: "browse".into(),
                suite: "smoke".into(),
                build_id: "u1".into(),
                start_time: "t0".into(),
                url: "https://shop.example/".into(),
                count: 2,
                failed: 1,
                total_time: vec![100.0, 200.0],
                ttl: vec![0.0, 0.0],
                tti: vec![0.0, 0.0],
                onload: vec![0.0, 0.0],
                latency: vec![10.0, 20.0],
                transfer: vec![0.0, 0.0],
                encoded_body_size: 0,
                decoded_body_size: 0,
            },
            time: 135.0,
            time_threshold: PageSeverity::Green,
            yellow_threshold_value: 150,
            red_threshold_value: 1000,
        };
        let line = format_page_line(&summary);
        assert!(line.contains("time=135.0 [green]"));
        assert!(line.contains("samples=2 failed=1"));

        let info = UiTestInfo {
            build_ids: vec!["u1".into()],
            tests_data: vec![vec![summary.page.clone()]],
            last_test_data: vec![summary],
        };
        assert!(format_ui_summary(&info).ends_with("Severity: 1 green, 0 orange, 0 red\n"));
    }
}
