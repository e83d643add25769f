//! Implementation of `permuta export <file> [-o OUT]`.
//!
//! Writes the loaded participant snapshot back out with canonical headers.
//! Rows dropped while loading (no usable court) are not exported. Without
//! `-o` the table goes to stdout as CSV; with `-o` the extension picks CSV or
//! XLSX. `--format` does not apply.
use std::path::Path;

use permuta_core::ExchangeEngine;
use permuta_import::{write_csv, write_path};

use crate::cmd::Context;
use crate::error::CliError;
use crate::format::pluralize;

/// Runs the `export` command.
///
/// # Errors
///
/// [`CliError::Output`] if the destination cannot be written or has an
/// unsupported extension.
pub fn run(engine: &ExchangeEngine, output: Option<&Path>, ctx: Context) -> Result<(), CliError> {
    let participants = engine.participants();
    match output {
        Some(path) => {
            write_path(path, participants).map_err(|e| CliError::Output {
                target: path.display().to_string(),
                detail: e.to_string(),
            })?;
            ctx.note(&format!(
                "wrote {} {} to {}",
                participants.len(),
                pluralize(participants.len(), "participant", "participants"),
                path.display()
            ));
        }
        None => {
            let stdout = std::io::stdout();
            write_csv(stdout.lock(), participants).map_err(|e| CliError::Output {
                target: "stdout".to_owned(),
                detail: e.to_string(),
            })?;
        }
    }
    Ok(())
}
