/// Workbook reading via calamine.
///
/// The participant table sits on one sheet with the header in row 1. Cell
/// values of every type are rendered to trimmed strings before the shared
/// [`ColumnMap`] turns them into records.
use std::io::{Read, Seek};

use calamine::{Data, Range, Reader, Xlsx, XlsxError, open_workbook_from_rs};
use permuta_core::ParticipantRecord;

use crate::columns::ColumnMap;
use crate::error::ImportError;

/// Converts a `calamine::Data` cell to a trimmed `String`.
///
/// Returns an empty string for empty and error cells.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_owned(),
        Data::Float(f) => {
            // Court codes typed as numbers come back as floats.
            if *f == f.floor() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_owned(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

/// Builds a column reference string like `"B"` from a zero-based column index.
pub fn col_letter(col_idx: usize) -> String {
    let mut n = col_idx + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Formats a cell reference as `"{Sheet}!{Col}{Row}"` for a zero-based data
/// row (the header is row 1, so data row 0 displays as row 2).
pub fn cell_ref(sheet_name: &str, col_idx: usize, data_row_idx: usize) -> String {
    format!("{}!{}{}", sheet_name, col_letter(col_idx), data_row_idx + 2)
}

/// Reads participant rows from a worksheet range.
pub(crate) fn records_from_range(
    range: &Range<Data>,
    sheet_name: &str,
) -> Result<Vec<ParticipantRecord>, ImportError> {
    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let columns = ColumnMap::from_headers(&header, sheet_name)?;

    let mut records = Vec::new();
    for (row_idx, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        match columns.record(&cells) {
            Some(record) => records.push(record),
            None => {
                tracing::trace!(row = %cell_ref(sheet_name, 0, row_idx), "skipping blank row");
            }
        }
    }
    tracing::debug!(sheet = sheet_name, rows = records.len(), "read worksheet");
    Ok(records)
}

/// Opens an `.xlsx` workbook and reads the participant table from `sheet`,
/// or from the first sheet when `None`.
pub(crate) fn read_workbook<R: Read + Seek>(
    reader: R,
    sheet: Option<&str>,
) -> Result<Vec<ParticipantRecord>, ImportError> {
    let mut workbook: Xlsx<R> =
        open_workbook_from_rs(reader).map_err(|e: XlsxError| ImportError::WorkbookRead {
            detail: e.to_string(),
        })?;

    let sheet_names = workbook.sheet_names();
    let name = match sheet {
        Some(wanted) => sheet_names
            .iter()
            .find(|s| s.as_str() == wanted)
            .cloned()
            .ok_or_else(|| ImportError::MissingSheet {
                sheet: wanted.to_owned(),
            })?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or(ImportError::EmptyWorkbook)?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| ImportError::WorkbookRead {
            detail: format!("failed to read sheet {name:?}: {e}"),
        })?;
    records_from_range(&range, &name)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn range(rows: &[&[&str]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height.saturating_sub(1), width.saturating_sub(1)));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if !value.is_empty() {
                    range.set_value((r as u32, c as u32), Data::String((*value).to_owned()));
                }
            }
        }
        range
    }

    #[test]
    fn col_letter_wraps_after_z() {
        assert_eq!(col_letter(0), "A");
        assert_eq!(col_letter(25), "Z");
        assert_eq!(col_letter(26), "AA");
        assert_eq!(cell_ref("Plan1", 1, 0), "Plan1!B2");
    }

    #[test]
    fn whole_floats_render_as_integers() {
        assert_eq!(cell_to_string(&Data::Float(12.0)), "12");
        assert_eq!(cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn reads_rows_and_skips_blank_ones() {
        let sheet = range(&[
            &["Nome", "Origem", "Destino 1", "Destino 2", "Entrância"],
            &["Ana", "TJSP", "TJRJ", "", "Final"],
            &["", "", "", "", ""],
            &["Bia", "TJRJ", "TJSP", "TJMG", ""],
        ]);
        let records = records_from_range(&sheet, "Plan1").expect("reads");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].band.as_deref(), Some("Final"));
        assert_eq!(records[1].destination_2.as_deref(), Some("TJMG"));
    }

    #[test]
    fn empty_sheet_reports_missing_columns() {
        let err = records_from_range(&Range::empty(), "Plan1").expect_err("no header");
        assert!(matches!(err, ImportError::MissingColumn { .. }));
    }
}
