/// Loading the participant table with size enforcement.
///
/// This module is the single entry point for input I/O in the `permuta`
/// binary. `permuta-core` never touches the filesystem; parsing is delegated
/// to `permuta-import` once the file has passed the size check.
use std::io::ErrorKind;
use std::path::Path;

use permuta_core::ExchangeEngine;
use permuta_import::{ImportError, load_participants};

use crate::error::CliError;

/// Reads `path` and builds an [`ExchangeEngine`] over its rows.
///
/// The file length is checked against `max_size` via `std::fs::metadata`
/// before any bytes are read.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, a
/// file over `max_size`, and every import failure.
pub fn load_engine(path: &Path, max_size: u64) -> Result<ExchangeEngine, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            path: path.to_path_buf(),
            limit: max_size,
            actual: file_size,
        });
    }

    let participants = load_participants(path).map_err(|e| import_error_to_cli(e, path))?;
    tracing::info!(
        path = %path.display(),
        participants = participants.len(),
        "loaded participant table"
    );
    Ok(ExchangeEngine::new(participants))
}

/// Routes plain I/O failures through [`io_error_to_cli`] so a file that
/// vanishes or is locked between the size check and the read reports the
/// same way as one that failed the check.
fn import_error_to_cli(e: ImportError, path: &Path) -> CliError {
    if let ImportError::Io(io) = &e {
        return io_error_to_cli(io, path);
    }
    CliError::Import {
        path: path.to_path_buf(),
        source: e,
    }
}

/// Maps a `std::io::Error` arising from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::Import {
            path: path.to_path_buf(),
            source: ImportError::Io(std::io::Error::new(kind, e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::io::Write as _;

    use super::*;

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let err = load_engine(Path::new("/nonexistent/permuta.csv"), u64::MAX).expect_err("missing");
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn oversized_file_is_rejected_before_parsing() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "Nome,Origem,Destino 1").expect("write");
        writeln!(file, "Ana,TJSP,TJRJ").expect("write");
        let err = load_engine(file.path(), 8).expect_err("too large");
        assert!(matches!(err, CliError::FileTooLarge { limit: 8, .. }));
    }

    #[test]
    fn loads_a_small_table() {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "Nome,Origem,Destino 1").expect("write");
        writeln!(file, "Ana,TJSP,TJRJ").expect("write");
        writeln!(file, "Bia,,TJSP").expect("write");
        file.flush().expect("flush");
        let engine = load_engine(file.path(), u64::MAX).expect("loads");
        assert_eq!(engine.participants().len(), 1);
    }
}
