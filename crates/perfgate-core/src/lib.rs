//! Build-level summaries of performance-test measurements.
//!
//! Raw API request samples and UI page samples are read from a measurement
//! store, the most recent builds are selected, UI samples are merged per page,
//! and the latest build is classified against yellow/red thresholds. API
//! reports also carry the latest audit build as a comparison baseline.

pub mod aggregate;
pub mod assemble;
pub mod config;
pub mod errors;
pub mod model;
pub mod report;
pub mod select;
pub mod severity;
pub mod source;
pub mod storage;
pub mod thresholds;

pub use assemble::{ApiSummary, ApiTestInfo, PageSummary, TestInfoAssembler, UiTestInfo};
pub use errors::{ReportError, ReportResult};
pub use model::{ApiSelection, Dataset, Datasets, MetricDomain, ThresholdPair, UiSelection};
pub use source::MeasurementSource;
pub use storage::Store;
