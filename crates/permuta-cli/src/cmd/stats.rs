//! Implementation of `permuta stats <file> [--top N] [--normalize-keys]`.
//!
//! Prints the network totals followed by three rankings: most requested
//! (desired by the most participants), most exporting (held by the most
//! participants) and most connected (the sum of both).
//!
//! Output (JSON mode): `{"summary", "most_requested", "most_exporting",
//! "most_connected", "courts"}` where each ranking is a list of
//! `{"court", "count"}` objects.
use std::io::Write;

use permuta_core::{
    ExchangeEngine, NetworkStats, NetworkSummary, StatsKey, StatsOptions,
};
use serde::Serialize;

use crate::OutputFormat;
use crate::cmd::Context;
use crate::error::CliError;
use crate::format::write_json;

#[derive(Serialize)]
struct Ranked<'a> {
    court: &'a str,
    count: usize,
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    summary: NetworkSummary,
    most_requested: Vec<Ranked<'a>>,
    most_exporting: Vec<Ranked<'a>>,
    most_connected: Vec<Ranked<'a>>,
    courts: &'a NetworkStats,
}

fn ranked(list: Vec<(&str, usize)>) -> Vec<Ranked<'_>> {
    list.into_iter()
        .map(|(court, count)| Ranked { court, count })
        .collect()
}

/// Runs the `stats` command.
///
/// # Errors
///
/// [`CliError::Output`] if stdout cannot be written.
pub fn run(
    engine: &ExchangeEngine,
    top: usize,
    normalize_keys: bool,
    ctx: Context,
) -> Result<(), CliError> {
    let key = if normalize_keys {
        StatsKey::Normalized
    } else {
        StatsKey::Raw
    };
    let stats = engine.stats(StatsOptions { key });
    let summary = engine.summary();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Human => print_human(&mut out, &summary, &stats, top),
        OutputFormat::Json => write_json(
            &mut out,
            &StatsOutput {
                summary,
                most_requested: ranked(stats.most_requested(top)),
                most_exporting: ranked(stats.most_exporting(top)),
                most_connected: ranked(stats.most_connected(top)),
                courts: &stats,
            },
        ),
    }
    .map_err(|e| CliError::stdout(&e))
}

fn print_human<W: Write>(
    w: &mut W,
    summary: &NetworkSummary,
    stats: &NetworkStats,
    top: usize,
) -> std::io::Result<()> {
    writeln!(w, "participants:\t{}", summary.participants)?;
    writeln!(w, "courts:\t{}", stats.len())?;
    writeln!(w, "preferences:\t{}", summary.preferences)?;
    writeln!(w, "direct swaps:\t{}", summary.direct_swaps)?;

    let sections = [
        ("most requested", stats.most_requested(top)),
        ("most exporting", stats.most_exporting(top)),
        ("most connected", stats.most_connected(top)),
    ];
    for (title, list) in sections {
        writeln!(w)?;
        writeln!(w, "{title}:")?;
        for (court, count) in list {
            writeln!(w, "  {court}\t{count}")?;
        }
    }
    Ok(())
}
