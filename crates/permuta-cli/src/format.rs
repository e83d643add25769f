/// Output writers shared by the subcommands.
///
/// Human output is tab-separated so it can be piped through `cut` or
/// `column -t`; JSON output is a single pretty-printed document.
use std::io::{self, Write};

use permuta_core::{Cycle, DirectSwap};
use serde::Serialize;

/// Picks `singular` for a count of one, `plural` otherwise.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

/// Writes direct swaps as a table, one pair per line.
///
/// Columns: `PARTICIPANT_A`, `BAND_A`, `MOVE_A`, `PARTICIPANT_B`, `BAND_B`,
/// `MOVE_B`.
pub fn write_swaps_human<W: Write>(w: &mut W, swaps: &[DirectSwap]) -> io::Result<()> {
    writeln!(
        w,
        "PARTICIPANT_A\tBAND_A\tMOVE_A\tPARTICIPANT_B\tBAND_B\tMOVE_B"
    )?;
    for s in swaps {
        writeln!(
            w,
            "{}\t{}\t{} → {}\t{}\t{}\t{} → {}",
            s.participant_a,
            s.band_a,
            s.current_court_a,
            s.matched_destination_a,
            s.participant_b,
            s.band_b,
            s.current_court_b,
            s.matched_destination_b,
        )?;
    }
    Ok(())
}

/// Writes cycles as numbered blocks, one member per indented line.
pub fn write_cycles_human<W: Write>(w: &mut W, cycles: &[Cycle]) -> io::Result<()> {
    for (i, cycle) in cycles.iter().enumerate() {
        writeln!(w, "cycle {}:", i + 1)?;
        for m in cycle.members() {
            writeln!(
                w,
                "  {}\t{}\t{} → {}",
                m.name, m.band, m.current_court, m.next_hop_court
            )?;
        }
    }
    Ok(())
}
