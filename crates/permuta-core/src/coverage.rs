/// Coverage analysis: which participants appear in at least one exchange.
///
/// Keyed by participant name, like the rest of the reporting surface. When
/// [`CoverageConfig::verbose`] is set the totals and every uncovered name are
/// emitted as `tracing` events.
use std::collections::BTreeSet;

use serde::Serialize;

use crate::graph::{Cycle, DirectSwap};
use crate::participant::Participant;

/// Options for [`analyze_coverage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageConfig {
    /// Log totals and the uncovered names at `info` level.
    pub verbose: bool,
}

/// Result of [`analyze_coverage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Every participant name.
    pub all: BTreeSet<String>,
    /// Names appearing in at least one swap or cycle.
    pub involved: BTreeSet<String>,
    /// Names appearing in none.
    pub not_involved: BTreeSet<String>,
}

impl CoverageReport {
    /// Share of participants covered, in `0.0..=1.0`; `0.0` for no input.
    pub fn ratio(&self) -> f64 {
        if self.all.is_empty() {
            0.0
        } else {
            self.involved.len() as f64 / self.all.len() as f64
        }
    }
}

/// Splits participant names into those covered by `swaps`/`cycles` and the
/// rest.
pub fn analyze_coverage(
    participants: &[Participant],
    swaps: &[DirectSwap],
    cycles: &[Cycle],
    config: &CoverageConfig,
) -> CoverageReport {
    let all: BTreeSet<String> = participants.iter().map(|p| p.name().to_owned()).collect();

    let mut involved: BTreeSet<String> = BTreeSet::new();
    for swap in swaps {
        involved.insert(swap.participant_a.clone());
        involved.insert(swap.participant_b.clone());
    }
    for cycle in cycles {
        involved.extend(cycle.members().iter().map(|m| m.name.clone()));
    }

    let not_involved: BTreeSet<String> = all.difference(&involved).cloned().collect();

    if config.verbose {
        tracing::info!(
            total = all.len(),
            involved = involved.len(),
            not_involved = not_involved.len(),
            "exchange coverage"
        );
        for name in &not_involved {
            tracing::info!(name = %name, "participant not in any exchange");
        }
    }

    CoverageReport {
        all,
        involved,
        not_involved,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::graph::{RouteFilter, SignatureKey, build_graph, direct_swaps, find_cycles};

    fn p(name: &str, court: &str, desired: &[&str]) -> Participant {
        Participant::new(name, court, desired, None).expect("valid participant")
    }

    #[test]
    fn splits_covered_and_uncovered_names() {
        let participants = vec![
            p("Ana", "X", &["Y"]),
            p("Bia", "Y", &["X"]),
            p("Caio", "Z", &["W"]),
            p("Duda", "W", &["Q"]),
            p("Eli", "Q", &["Z"]),
            p("Fabio", "R", &["X"]),
        ];
        let g = build_graph(&participants);
        let swaps = direct_swaps(&participants, &g, &RouteFilter::none());
        let triangles = find_cycles(&participants, &g, 3, &RouteFilter::none(), SignatureKey::Courts);
        let report = analyze_coverage(
            &participants,
            &swaps,
            &triangles,
            &CoverageConfig { verbose: true },
        );
        assert_eq!(report.all.len(), 6);
        assert_eq!(report.involved.len(), 5);
        assert_eq!(
            report.not_involved.iter().map(String::as_str).collect::<Vec<_>>(),
            ["Fabio"]
        );
        assert!((report.ratio() - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_has_zero_ratio() {
        let report = analyze_coverage(&[], &[], &[], &CoverageConfig::default());
        assert!(report.all.is_empty());
        assert!(report.ratio().abs() < f64::EPSILON);
    }
}
