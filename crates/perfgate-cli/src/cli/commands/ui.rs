use super::super::args::{OutputFormat, UiArgs};
use super::settings::{emit, Settings};
use crate::exit_codes;
use perfgate_core::report::{console, json};
use perfgate_core::{TestInfoAssembler, UiSelection};

pub fn run(args: UiArgs) -> anyhow::Result<i32> {
    let settings = Settings::load(&args.store)?;
    let store = settings.open_store()?;
    let selection = UiSelection {
        scenario: args.scenario,
        suite: args.suite,
        limit: settings.limit(args.limit)?,
    };
    tracing::info!(%selection, limit = selection.limit, "building ui report");

    let info = TestInfoAssembler::new(&store, &settings.datasets).ui_test_info(&selection)?;
    let rendered = match args.format {
        OutputFormat::Text => console::format_ui_summary(&info),
        OutputFormat::Json => json::ui_json(&info)?,
    };
    emit(&rendered, args.out.as_deref(), &args.format)?;
    Ok(exit_codes::SUCCESS)
}
