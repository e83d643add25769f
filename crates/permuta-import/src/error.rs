/// Errors produced while reading or writing participant tables.
use thiserror::Error;

/// All error conditions of the import and export paths.
///
/// Structural problems (missing columns, missing sheets) fail fast; no
/// partial table is returned.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A required column header is absent from the table.
    #[error("missing required column {column:?} in {table}")]
    MissingColumn {
        /// Sheet name, or `"CSV"` for delimited input.
        table: String,
        /// Canonical header of the missing column.
        column: String,
    },

    /// The requested sheet does not exist.
    #[error("workbook has no sheet named {sheet:?}")]
    MissingSheet {
        /// Name that was asked for.
        sheet: String,
    },

    /// The workbook contains no sheets at all.
    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    /// calamine could not open or decode the workbook.
    #[error("cannot read workbook: {detail}")]
    WorkbookRead {
        /// Human-readable description of the error.
        detail: String,
    },

    /// rust_xlsxwriter could not build the output workbook.
    #[error("cannot write workbook: {detail}")]
    WorkbookWrite {
        /// Human-readable description of the error.
        detail: String,
    },

    /// Malformed CSV input or a failure while writing CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The path extension names no supported format.
    #[error("unsupported file extension {extension:?}; expected .xlsx or .csv")]
    UnsupportedExtension {
        /// Extension as found on the path (empty when absent).
        extension: String,
    },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
