//! Query and schema helpers behind [`crate::storage::Store`].
//!
//! Every helper takes the dataset explicitly and qualifies table names with
//! its schema.

pub(crate) mod api;
pub(crate) mod schema;
pub(crate) mod thresholds;
pub(crate) mod ui;

use crate::model::Dataset;

/// `"<dataset>".<table>`; dataset names are validated identifiers.
pub(crate) fn qualified(dataset: &Dataset, table: &str) -> String {
    format!("\"{}\".{}", dataset.as_str(), table)
}
