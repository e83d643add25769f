/// Spreadsheet and CSV import/export for the permuta exchange engine.
///
/// This crate turns a participant table into [`ParticipantRecord`]s and
/// writes a loaded snapshot back out. The `calamine`, `csv` and
/// `rust_xlsxwriter` dependencies are confined to this crate and do not bleed
/// into `permuta-core` or `permuta-cli`.
///
/// # Table layout
///
/// One row per participant, header in the first row. Columns are matched
/// case- and accent-insensitively:
///
/// | Column | Aliases | Required |
/// |---|---|---|
/// | `Nome` | `name` | yes |
/// | `Origem` | `origin`, `current_court` | yes |
/// | `Destino 1..3` | `Destino1..3`, `destination_1..3` | no |
/// | `Entrância` | `band` | no |
///
/// Any other column is ignored. Fully blank rows are skipped; rows without a
/// court are kept here and dropped when the engine builds its snapshot.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use permuta_core::{Participant, ParticipantRecord, participants_from_records};

mod columns;
mod delimited;
pub mod error;
mod export;
mod sheet;

pub use columns::{HEADER_BAND, HEADER_COURT, HEADER_DESTINATIONS, HEADER_NAME};
pub use error::ImportError;
pub use export::{EXPORT_SHEET, write_csv, write_xlsx};
pub use sheet::{cell_ref, cell_to_string, col_letter};

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Office Open XML workbook (`.xlsx`, `.xlsm`).
    Xlsx,
    /// Comma-separated values (`.csv`).
    Csv,
}

impl TableFormat {
    /// Picks the format from a path's extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// [`ImportError::UnsupportedExtension`] for anything else.
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(ImportError::UnsupportedExtension { extension }),
        }
    }
}

/// Reads the participant table from an `.xlsx` workbook.
///
/// `sheet` selects a worksheet by exact name; `None` reads the first one.
///
/// # Errors
///
/// Returns [`ImportError`] if the workbook cannot be opened, the sheet is
/// missing, or a required column is absent.
pub fn read_xlsx<R: Read + Seek>(
    reader: R,
    sheet: Option<&str>,
) -> Result<Vec<ParticipantRecord>, ImportError> {
    sheet::read_workbook(reader, sheet)
}

/// Reads the participant table from CSV text.
///
/// # Errors
///
/// Returns [`ImportError`] on malformed CSV or a missing required column.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ParticipantRecord>, ImportError> {
    delimited::read_delimited(reader)
}

/// Reads a participant table from `path`, choosing the format by extension.
///
/// # Errors
///
/// Returns [`ImportError`] for unsupported extensions, I/O failures and every
/// error of [`read_xlsx`] / [`read_csv`].
pub fn read_path(path: &Path) -> Result<Vec<ParticipantRecord>, ImportError> {
    let format = TableFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);
    tracing::debug!(path = %path.display(), ?format, "reading participant table");
    match format {
        TableFormat::Xlsx => read_xlsx(reader, None),
        TableFormat::Csv => read_csv(reader),
    }
}

/// Reads `path` and builds the participant snapshot, skipping rows without
/// a usable court.
///
/// # Errors
///
/// As [`read_path`].
pub fn load_participants(path: &Path) -> Result<Vec<Participant>, ImportError> {
    let records = read_path(path)?;
    Ok(participants_from_records(&records))
}

/// Writes `participants` to `path`, choosing the format by extension.
///
/// # Errors
///
/// Returns [`ImportError`] for unsupported extensions, I/O failures and
/// every error of [`write_csv`] / [`write_xlsx`].
pub fn write_path(path: &Path, participants: &[Participant]) -> Result<(), ImportError> {
    let format = TableFormat::from_path(path)?;
    let writer = BufWriter::new(File::create(path)?);
    match format {
        TableFormat::Xlsx => write_xlsx(writer, participants),
        TableFormat::Csv => write_csv(writer, participants),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            TableFormat::from_path(Path::new("juizes.XLSX")).expect("xlsx"),
            TableFormat::Xlsx
        );
        assert_eq!(
            TableFormat::from_path(Path::new("dados.csv")).expect("csv"),
            TableFormat::Csv
        );
        let err = TableFormat::from_path(Path::new("dados.ods")).expect_err("ods");
        assert!(matches!(err, ImportError::UnsupportedExtension { ref extension } if extension == "ods"));
        assert!(TableFormat::from_path(Path::new("dados")).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_path(Path::new("/nonexistent/permuta/dados.csv")).expect_err("missing");
        assert!(matches!(err, ImportError::Io(_)));
    }
}
