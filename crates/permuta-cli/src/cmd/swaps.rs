//! Implementation of `permuta swaps <file> [--origin X --dest Y]`.
//!
//! Lists every pair of participants who want each other's court. With a
//! route, only pairs realizing the hop (in either direction) are kept.
//!
//! Output (human mode, default): tab-separated table, see
//! [`crate::format::write_swaps_human`].
//! Output (JSON mode): `{"count": N, "swaps": [...]}`.
use permuta_core::{DirectSwap, ExchangeEngine, RouteFilter};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::Context;
use crate::error::CliError;
use crate::format::{pluralize, write_json, write_swaps_human};

#[derive(Serialize)]
struct SwapsOutput<'a> {
    count: usize,
    swaps: &'a [DirectSwap],
}

/// Runs the `swaps` command.
///
/// # Errors
///
/// [`CliError::Output`] if stdout cannot be written.
pub fn run(engine: &ExchangeEngine, filter: &RouteFilter, ctx: Context) -> Result<(), CliError> {
    let swaps = engine.direct_swaps(filter);
    ctx.note(&format!(
        "found {} direct {}",
        swaps.len(),
        pluralize(swaps.len(), "swap", "swaps")
    ));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Human => write_swaps_human(&mut out, &swaps),
        OutputFormat::Json => write_json(
            &mut out,
            &SwapsOutput {
                count: swaps.len(),
                swaps: &swaps,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}
