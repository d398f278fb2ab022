use super::super::args::{ApiArgs, OutputFormat};
use super::settings::{emit, Settings};
use crate::exit_codes;
use perfgate_core::report::{console, json};
use perfgate_core::{ApiSelection, TestInfoAssembler};

pub fn run(args: ApiArgs) -> anyhow::Result<i32> {
    let settings = Settings::load(&args.store)?;
    let store = settings.open_store()?;
    let selection = ApiSelection {
        simulation: args.test,
        test_type: args.test_type,
        users: args.users,
        limit: settings.limit(args.limit)?,
    };
    tracing::info!(%selection, limit = selection.limit, "building api report");

    let info = TestInfoAssembler::new(&store, &settings.datasets).api_test_info(&selection)?;
    let rendered = match args.format {
        OutputFormat::Text => console::format_api_summary(&info),
        OutputFormat::Json => json::api_json(&info)?,
    };
    emit(&rendered, args.out.as_deref(), &args.format)?;
    Ok(exit_codes::SUCCESS)
}
