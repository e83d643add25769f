//! Implementation of `permuta coverage <file>`.
//!
//! Splits participants into those who appear in at least one unfiltered
//! exchange (swap or cycle up to the engine's cap) and those who do not.
//! With `--verbose` the uncovered names are also logged.
//!
//! Output (JSON mode): `{"total", "involved", "not_involved", "ratio",
//! "involved_names", "not_involved_names"}`.
use std::io::Write;

use permuta_core::{CoverageConfig, CoverageReport, ExchangeEngine};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::Context;
use crate::error::CliError;
use crate::format::write_json;

#[derive(Serialize)]
struct CoverageOutput<'a> {
    total: usize,
    involved: usize,
    not_involved: usize,
    ratio: f64,
    involved_names: Vec<&'a str>,
    not_involved_names: Vec<&'a str>,
}

impl<'a> CoverageOutput<'a> {
    fn new(report: &'a CoverageReport) -> Self {
        Self {
            total: report.all.len(),
            involved: report.involved.len(),
            not_involved: report.not_involved.len(),
            ratio: report.ratio(),
            involved_names: report.involved.iter().map(String::as_str).collect(),
            not_involved_names: report.not_involved.iter().map(String::as_str).collect(),
        }
    }
}

/// Runs the `coverage` command.
///
/// # Errors
///
/// [`CliError::Output`] if stdout cannot be written.
pub fn run(engine: &ExchangeEngine, ctx: Context) -> Result<(), CliError> {
    let report = engine.coverage(&CoverageConfig {
        verbose: ctx.verbose,
    });

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &CoverageOutput::new(&report)),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: Write>(w: &mut W, report: &CoverageReport) -> std::io::Result<()> {
    writeln!(w, "participants:\t{}", report.all.len())?;
    writeln!(
        w,
        "involved:\t{} ({:.1}%)",
        report.involved.len(),
        report.ratio() * 100.0
    )?;
    writeln!(w, "not involved:\t{}", report.not_involved.len())?;
    for name in &report.not_involved {
        writeln!(w, "  {name}")?;
    }
    Ok(())
}
