use crate::assemble::{ApiTestInfo, UiTestInfo};
use crate::errors::ReportResult;
use std::path::Path;

pub fn api_json(info: &ApiTestInfo) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(info)?)
}

pub fn ui_json(info: &UiTestInfo) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(info)?)
}

pub fn write_report(rendered: &str, out: &Path) -> ReportResult<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out, rendered)?;
    Ok(())
}
