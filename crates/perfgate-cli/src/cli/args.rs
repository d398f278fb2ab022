use clap::{Parser, Subcommand, ValueEnum};
use perfgate_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "perfgate",
    version,
    about = "Build-level performance summaries with pass/warn/fail thresholds and baseline comparison"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create dataset files with the measurement tables
    Init(InitArgs),
    /// Summarize the latest API load-test build against thresholds and the audit baseline
    Api(ApiArgs),
    /// Summarize the latest UI build per page
    Ui(UiArgs),
    Version,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Store location and dataset names; flags override the config file.
#[derive(clap::Args, Clone, Debug)]
pub struct StoreArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "PERFGATE_CONFIG")]
    pub config: PathBuf,

    /// Directory holding the dataset files
    #[arg(long, env = "PERFGATE_STORE_DIR")]
    pub store_dir: Option<PathBuf>,

    #[arg(long, env = "PERFGATE_COMPARISON_DATASET")]
    pub comparison_dataset: Option<String>,

    #[arg(long, env = "PERFGATE_THRESHOLDS_DATASET")]
    pub thresholds_dataset: Option<String>,

    #[arg(long, env = "PERFGATE_UI_DATASET")]
    pub ui_dataset: Option<String>,
}

#[derive(clap::Args, Clone, Debug)]
pub struct InitArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

#[derive(clap::Args, Clone, Debug)]
pub struct ApiArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Simulation (test) name
    #[arg(long)]
    pub test: String,

    #[arg(long)]
    pub test_type: String,

    #[arg(long)]
    pub users: i64,

    /// Number of recent builds to include (default: test_limit from config)
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Debug)]
pub struct UiArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(long)]
    pub scenario: String,

    #[arg(long)]
    pub suite: String,

    /// Number of recent builds to include (default: test_limit from config)
    #[arg(long)]
    pub limit: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_args_parse_with_defaults() {
        let cli = Cli::try_parse_from([
            "perfgate",
            "api",
            "--test",
            "checkout",
            "--test-type",
            "load",
            "--users",
            "25",
        ])
        .unwrap();
        let Command::Api(args) = cli.cmd else {
            panic!("expected api command");
        };
        assert_eq!(args.test, "checkout");
        assert_eq!(args.users, 25);
        assert_eq!(args.limit, None);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.store.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn ui_requires_scenario_and_suite() {
        assert!(Cli::try_parse_from(["perfgate", "ui", "--scenario", "browse"]).is_err());
        let cli = Cli::try_parse_from([
            "perfgate",
            "ui",
            "--scenario",
            "browse",
            "--suite",
            "smoke",
            "--format",
            "json",
            "--limit",
            "3",
        ])
        .unwrap();
        let Command::Ui(args) = cli.cmd else {
            panic!("expected ui command");
        };
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.limit, Some(3));
    }
}
