use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AssertionsError;
use crate::reconcile::Reconciliation;
use crate::record::write_table;

pub const IMPLEMENTED_FILE: &str = "implemented.csv";
pub const MANUAL_FILE: &str = "manual.csv";
pub const NEEDS_REVIEW_FILE: &str = "needsReview.csv";
pub const OLD_FILE: &str = "old.csv";
pub const REPORT_FILE: &str = "report.json";

/// Summary counts written to `report.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generation_date: String,
    pub assertions_size: usize,
    pub implemented_size: usize,
    pub manual_size: usize,
    pub old_size: usize,
    pub needs_review_size: usize,
}

impl Report {
    pub fn new(
        assertions_size: usize,
        result: &Reconciliation,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            generation_date: http_date(generated_at),
            assertions_size,
            implemented_size: result.implemented.len(),
            manual_size: result.manual.len(),
            old_size: result.old.len(),
            needs_review_size: result.needs_review.len(),
        }
    }
}

/// RFC 1123 date, e.g. `Mon, 19 Oct 2026 13:26:00 GMT`.
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Write the four CSV tables and `report.json` into `dir`.
pub fn write_reports(
    dir: &Path,
    result: &Reconciliation,
    report: &Report,
) -> Result<(), AssertionsError> {
    let tables = [
        (IMPLEMENTED_FILE, &result.implemented),
        (MANUAL_FILE, &result.manual),
        (NEEDS_REVIEW_FILE, &result.needs_review),
        (OLD_FILE, &result.old),
    ];
    for (name, records) in tables {
        log::info!("Generating {name}");
        write_table(&dir.join(name), records)?;
    }

    log::info!("Generating {REPORT_FILE}");
    let path: PathBuf = dir.join(REPORT_FILE);
    let json = serde_json::to_string(report)?;
    fs::write(&path, json).map_err(|source| AssertionsError::Io { path, source })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn date_matches_http_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 13, 26, 0).unwrap();
        assert_eq!(http_date(at), "Mon, 19 Oct 2026 13:26:00 GMT");

        let at = Utc.with_ymd_and_hms(2023, 3, 5, 7, 8, 9).unwrap();
        assert_eq!(http_date(at), "Sun, 05 Mar 2023 07:08:09 GMT");
    }

    #[test]
    fn report_uses_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap();
        let report = Report::new(3, &Reconciliation::default(), at);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["assertionsSize"], 3);
        assert_eq!(value["needsReviewSize"], 0);
        assert_eq!(value["generationDate"], "Mon, 19 Oct 2026 00:00:00 GMT");
    }
}
