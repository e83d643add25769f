/// Writing the loaded participant table back out.
///
/// Both formats use the canonical Portuguese headers, so an exported file
/// reads back through [`crate::read_path`] unchanged.
use std::io::Write;

use permuta_core::Participant;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use serde::Serialize;

use crate::columns::{HEADER_BAND, HEADER_COURT, HEADER_DESTINATIONS, HEADER_NAME};
use crate::error::ImportError;

/// Sheet name used by [`write_xlsx`].
pub const EXPORT_SHEET: &str = "Participantes";

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Nome")]
    name: &'a str,
    #[serde(rename = "Origem")]
    current_court: &'a str,
    #[serde(rename = "Destino 1")]
    destination_1: Option<&'a str>,
    #[serde(rename = "Destino 2")]
    destination_2: Option<&'a str>,
    #[serde(rename = "Destino 3")]
    destination_3: Option<&'a str>,
    #[serde(rename = "Entrância")]
    band: &'a str,
}

impl<'a> ExportRow<'a> {
    fn new(p: &'a Participant) -> Self {
        let dest = |i: usize| p.desired_courts().get(i).map(String::as_str);
        Self {
            name: p.name(),
            current_court: p.current_court(),
            destination_1: dest(0),
            destination_2: dest(1),
            destination_3: dest(2),
            band: p.band(),
        }
    }

    fn cells(&self) -> [&'a str; 6] {
        [
            self.name,
            self.current_court,
            self.destination_1.unwrap_or_default(),
            self.destination_2.unwrap_or_default(),
            self.destination_3.unwrap_or_default(),
            self.band,
        ]
    }
}

/// Writes `participants` as CSV with a header row.
///
/// # Errors
///
/// Returns [`ImportError::Csv`] if serialization or the underlying write
/// fails.
pub fn write_csv<W: Write>(writer: W, participants: &[Participant]) -> Result<(), ImportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for p in participants {
        wtr.serialize(ExportRow::new(p))?;
    }
    if participants.is_empty() {
        wtr.write_record(header_row())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `participants` as a single-sheet `.xlsx` workbook.
///
/// # Errors
///
/// Returns [`ImportError::WorkbookWrite`] if the workbook cannot be built and
/// [`ImportError::Io`] if writing the bytes fails.
pub fn write_xlsx<W: Write>(mut writer: W, participants: &[Participant]) -> Result<(), ImportError> {
    let mut wb = Workbook::new();
    let ws = wb
        .add_worksheet()
        .set_name(EXPORT_SHEET)
        .map_err(workbook_error)?;
    write_sheet(ws, participants).map_err(workbook_error)?;

    let bytes = wb.save_to_buffer().map_err(workbook_error)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

fn header_row() -> [&'static str; 6] {
    let [d1, d2, d3] = HEADER_DESTINATIONS;
    [HEADER_NAME, HEADER_COURT, d1, d2, d3, HEADER_BAND]
}

fn write_sheet(ws: &mut Worksheet, participants: &[Participant]) -> Result<(), XlsxError> {
    for (col, header) in (0u16..).zip(header_row()) {
        ws.write_string(0, col, header)?;
    }
    for (row, p) in (1u32..).zip(participants) {
        for (col, value) in (0u16..).zip(ExportRow::new(p).cells()) {
            if !value.is_empty() {
                ws.write_string(row, col, value)?;
            }
        }
    }
    Ok(())
}

fn workbook_error(e: XlsxError) -> ImportError {
    ImportError::WorkbookWrite {
        detail: e.to_string(),
    }
}
