//! Reconcile the WoT assertion table against the previously implemented one
//! and write the manual-testing reports.

pub mod error;
pub mod reconcile;
pub mod record;
pub mod report;

use std::path::{Path, PathBuf};

use chrono::Utc;

pub use error::AssertionsError;
pub use reconcile::{MANUAL_FLAG, Reconciliation, reconcile};
pub use record::{AssertionRecord, read_table};
pub use report::{Report, write_reports};

/// Input and output locations of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionPaths {
    pub assertions: PathBuf,
    pub pre_implemented: PathBuf,
    pub output_dir: PathBuf,
}

impl AssertionPaths {
    /// The standard layout: `<dir>/assertions.csv`,
    /// `<dir>/manual-generation-inputs/pre-implemented.csv`, reports in `<dir>`.
    pub fn under(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            assertions: dir.join("assertions.csv"),
            pre_implemented: dir
                .join("manual-generation-inputs")
                .join("pre-implemented.csv"),
            output_dir: dir.to_path_buf(),
        }
    }
}

impl Default for AssertionPaths {
    fn default() -> Self {
        Self::under("assertions-csv")
    }
}

/// Read both tables, reconcile them and write every report.
pub fn run(paths: &AssertionPaths, manual_flag: &str) -> Result<Report, AssertionsError> {
    let assertions = read_table(&paths.assertions)?;
    let pre_implemented = read_table(&paths.pre_implemented)?;

    let result = reconcile(&assertions, pre_implemented, manual_flag);
    let report = Report::new(assertions.len(), &result, Utc::now());

    // Counts need not balance: old entries are absent from the master table.
    log::debug!(
        "assertions={} implemented={} manual={} old={} needs_review={}",
        report.assertions_size,
        report.implemented_size,
        report.manual_size,
        report.old_size,
        report.needs_review_size
    );

    write_reports(&paths.output_dir, &result, &report)?;
    Ok(report)
}
