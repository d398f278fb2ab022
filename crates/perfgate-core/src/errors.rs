//! Error types for report assembly.

use std::path::PathBuf;

/// Exit code when the selection matched no builds.
pub const EXIT_NO_DATA: i32 = 3;
/// Exit code for configuration, store and I/O failures.
pub const EXIT_INTERNAL: i32 = 2;

/// Report errors.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The primary build selection returned no build ids.
    #[error("no data found for given parameters: {selection}")]
    NoData { selection: String },

    /// Dataset name cannot be used as a schema name.
    #[error("invalid dataset name '{name}': {reason}")]
    InvalidDataset { name: String, reason: String },

    /// Dataset file does not exist under the store directory.
    #[error("dataset '{name}' not found at {}", path.display())]
    DatasetMissing { name: String, path: PathBuf },

    /// Store has no directory to resolve dataset files against.
    #[error("dataset '{name}' is not attached and the store has no directory")]
    DatasetNotAttached { name: String },

    /// An aggregated page record has no samples for a metric.
    #[error("page '{page}' has no {metric} samples")]
    EmptySamples { page: String, metric: &'static str },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// Query failure, passed through unmodified.
    #[error(transparent)]
    Store(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    pub fn no_data(selection: impl Into<String>) -> Self {
        Self::NoData {
            selection: selection.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoData { .. } => EXIT_NO_DATA,
            _ => EXIT_INTERNAL,
        }
    }
}

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
