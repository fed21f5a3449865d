use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssertionsError;

/// Column order of every assertion table, read or written.
pub const HEADERS: [&str; 4] = ["ID", "Status", "Comment", "Assertion"];

/// One row of an assertion table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssertionRecord {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Status", default)]
    pub status: Option<String>,

    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,

    #[serde(rename = "Assertion", default)]
    pub assertion: String,
}

/// Parse a CSV table with a header row. Missing optional columns are allowed.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<AssertionRecord>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    rdr.deserialize::<AssertionRecord>().collect()
}

/// Write a table, header row first even when there are no records.
pub fn write_records<W: io::Write>(
    writer: W,
    records: &[AssertionRecord],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn read_table(path: &Path) -> Result<Vec<AssertionRecord>, AssertionsError> {
    let wrap = |source: csv::Error| AssertionsError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| wrap(e.into()))?;
    read_records(file).map_err(wrap)
}

pub fn write_table(path: &Path, records: &[AssertionRecord]) -> Result<(), AssertionsError> {
    let wrap = |source: csv::Error| AssertionsError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(|e| wrap(e.into()))?;
    write_records(file, records).map_err(wrap)
}
