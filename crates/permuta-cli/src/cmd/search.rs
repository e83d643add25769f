//! Implementation of `permuta search <file> --origin X --dest Y`.
//!
//! Answers "who can I trade with to move from X to Y?": direct swaps plus
//! cycles of every length from 3 up to the engine's cap, each realizing the
//! hop `X → Y`.
//!
//! Output (human mode, default): one section per exchange size, empty
//! sections included so the reader can see nothing was skipped.
//! Output (JSON mode): `{"origin", "destination", "total", "direct_swaps",
//! "cycles": {"3": [...], ...}}`.
use std::io::Write;

use permuta_core::{CycleQuery, ExchangeEngine, SearchResult};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::Context;
use crate::error::CliError;
use crate::format::{pluralize, write_cycles_human, write_json, write_swaps_human};

#[derive(Serialize)]
struct SearchOutput<'a> {
    origin: &'a str,
    destination: &'a str,
    total: usize,
    #[serde(flatten)]
    result: &'a SearchResult,
}

/// Runs the `search` command.
///
/// # Errors
///
/// [`CliError::Output`] if stdout cannot be written.
pub fn run(
    engine: &ExchangeEngine,
    origin: &str,
    destination: &str,
    query: &CycleQuery,
    ctx: Context,
) -> Result<(), CliError> {
    let result = engine.search(query);
    let total = result.total();
    ctx.note(&format!(
        "found {total} {} for {origin} → {destination}",
        pluralize(total, "exchange", "exchanges")
    ));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Human => print_human(&mut out, &result),
        OutputFormat::Json => write_json(
            &mut out,
            &SearchOutput {
                origin,
                destination,
                total,
                result: &result,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: Write>(w: &mut W, result: &SearchResult) -> std::io::Result<()> {
    writeln!(w, "direct swaps ({}):", result.direct_swaps.len())?;
    if !result.direct_swaps.is_empty() {
        write_swaps_human(w, &result.direct_swaps)?;
    }
    for (length, cycles) in &result.cycles {
        writeln!(w)?;
        writeln!(w, "{length}-way cycles ({}):", cycles.len())?;
        write_cycles_human(w, cycles)?;
    }
    Ok(())
}
