use super::super::args::InitArgs;
use super::settings::Settings;
use crate::exit_codes;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    let settings = Settings::load(&args.store)?;
    let store = settings.open_store()?;
    let ds = &settings.datasets;

    for dataset in [&ds.comparison, &ds.thresholds, &ds.ui] {
        let created = store.init_dataset(dataset)?;
        let path = store
            .dataset_path(dataset)
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        if created.is_empty() {
            println!("   Skipped {path} (up to date)");
        } else {
            println!("   Created {path} ({})", created.join(", "));
        }
    }
    Ok(exit_codes::SUCCESS)
}
