/// CSV reading via the `csv` crate.
use std::io::Read;

use permuta_core::ParticipantRecord;

use crate::columns::ColumnMap;
use crate::error::ImportError;

/// Table name used in errors for delimited input.
const TABLE: &str = "CSV";

/// Reads participant rows from comma-separated text with a header row.
///
/// Rows may be shorter or longer than the header; missing cells read as
/// blank.
pub(crate) fn read_delimited<R: Read>(reader: R) -> Result<Vec<ParticipantRecord>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(rdr.headers()?.iter(), TABLE)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let cells: Vec<&str> = row.iter().collect();
        if let Some(record) = columns.record(&cells) {
            records.push(record);
        }
    }
    tracing::debug!(rows = records.len(), "read CSV");
    Ok(records)
}
