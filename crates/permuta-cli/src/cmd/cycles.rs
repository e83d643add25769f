//! Implementation of `permuta cycles <file> --length K [--origin X --dest Y]`.
//!
//! Lists distinct exchange cycles of exactly `K` participants. Lengths above
//! the engine's cap produce an empty list and a logged warning.
//!
//! Output (human mode, default): numbered blocks, one member per line.
//! Output (JSON mode): `{"length": K, "count": N, "cycles": [...]}`.
use permuta_core::{Cycle, CycleQuery, ExchangeEngine};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::Context;
use crate::error::CliError;
use crate::format::{pluralize, write_cycles_human, write_json};

#[derive(Serialize)]
struct CyclesOutput<'a> {
    length: usize,
    count: usize,
    cycles: &'a [Cycle],
}

/// Runs the `cycles` command.
///
/// # Errors
///
/// [`CliError::Output`] if stdout cannot be written.
pub fn run(
    engine: &ExchangeEngine,
    length: usize,
    query: &CycleQuery,
    ctx: Context,
) -> Result<(), CliError> {
    let cycles = engine.cycles(length, query);
    ctx.note(&format!(
        "found {} {}-way {}",
        cycles.len(),
        length,
        pluralize(cycles.len(), "cycle", "cycles")
    ));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Human => write_cycles_human(&mut out, &cycles),
        OutputFormat::Json => write_json(
            &mut out,
            &CyclesOutput {
                length,
                count: cycles.len(),
                cycles: &cycles,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}
