/// Query facade over one immutable participant snapshot.
///
/// [`ExchangeEngine`] owns the participants and the [`PreferenceGraph`]
/// derived from them. Every query recomputes its result from that snapshot;
/// nothing is cached between calls and nothing is shared between engines.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::coverage::{CoverageConfig, CoverageReport, analyze_coverage};
use crate::graph::{
    Cycle, DirectSwap, MAX_CYCLE_LENGTH, PreferenceGraph, RouteFilter, SignatureKey, build_graph,
    direct_swaps, find_cycles,
};
use crate::participant::{Participant, ParticipantRecord, participants_from_records};
use crate::stats::{NetworkStats, StatsOptions, compute_stats};

/// Shortest cycle covered by [`ExchangeEngine::search`]; swaps are reported
/// separately.
const SEARCH_MIN_LENGTH: usize = 3;

/// Parameters shared by cycle queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleQuery {
    /// Origin→destination relevance filter.
    pub filter: RouteFilter,
    /// How repeated discoveries are recognised.
    pub signature: SignatureKey,
}

impl CycleQuery {
    /// Unfiltered query with the default signature.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query restricted to the hop `origin → destination`.
    pub fn for_route(origin: &str, destination: &str) -> Self {
        Self {
            filter: RouteFilter::hop(origin, destination),
            signature: SignatureKey::default(),
        }
    }
}

/// Headline figures for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    /// Participants in the snapshot.
    pub participants: usize,
    /// Distinct court labels (as written in the data).
    pub courts: usize,
    /// Destination entries across all participants.
    pub preferences: usize,
    /// Unfiltered direct swaps.
    pub direct_swaps: usize,
}

/// Everything [`ExchangeEngine::search`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Matching direct swaps.
    pub direct_swaps: Vec<DirectSwap>,
    /// Matching cycles keyed by length, `3..=MAX_CYCLE_LENGTH`.
    pub cycles: BTreeMap<usize, Vec<Cycle>>,
}

impl SearchResult {
    /// Total number of exchanges of every length.
    pub fn total(&self) -> usize {
        self.direct_swaps.len() + self.cycles.values().map(Vec::len).sum::<usize>()
    }

    /// Returns `true` when nothing was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Exchange queries over a participant snapshot.
#[derive(Debug)]
pub struct ExchangeEngine {
    participants: Vec<Participant>,
    graph: PreferenceGraph,
}

impl ExchangeEngine {
    /// Takes ownership of the snapshot and indexes it.
    pub fn new(participants: Vec<Participant>) -> Self {
        let graph = build_graph(&participants);
        Self {
            participants,
            graph,
        }
    }

    /// Builds the snapshot from raw rows, skipping rows without a court.
    pub fn from_records(records: &[ParticipantRecord]) -> Self {
        Self::new(participants_from_records(records))
    }

    /// The snapshot, in input order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// The preference graph built from the snapshot.
    pub fn graph(&self) -> &PreferenceGraph {
        &self.graph
    }

    /// Direct swaps, optionally restricted by `filter`.
    pub fn direct_swaps(&self, filter: &RouteFilter) -> Vec<DirectSwap> {
        if !self.route_feasible(filter) {
            return Vec::new();
        }
        direct_swaps(&self.participants, &self.graph, filter)
    }

    /// Distinct cycles of exactly `length` participants.
    pub fn cycles(&self, length: usize, query: &CycleQuery) -> Vec<Cycle> {
        if !self.route_feasible(&query.filter) {
            return Vec::new();
        }
        find_cycles(
            &self.participants,
            &self.graph,
            length,
            &query.filter,
            query.signature,
        )
    }

    /// Direct swaps plus cycles of every length from 3 to
    /// [`MAX_CYCLE_LENGTH`].
    pub fn search(&self, query: &CycleQuery) -> SearchResult {
        let direct_swaps = self.direct_swaps(&query.filter);
        let cycles = (SEARCH_MIN_LENGTH..=MAX_CYCLE_LENGTH)
            .map(|k| (k, self.cycles(k, query)))
            .collect();
        SearchResult {
            direct_swaps,
            cycles,
        }
    }

    /// Per-court statistics.
    pub fn stats(&self, options: StatsOptions) -> NetworkStats {
        compute_stats(&self.participants, options)
    }

    /// Headline figures: participant, court, preference and swap counts.
    pub fn summary(&self) -> NetworkSummary {
        let stats = self.stats(StatsOptions::default());
        NetworkSummary {
            participants: self.participants.len(),
            courts: stats.len(),
            preferences: stats.total_requested(),
            direct_swaps: self.direct_swaps(&RouteFilter::none()).len(),
        }
    }

    /// Which participants take part in at least one unfiltered exchange of
    /// any supported length.
    ///
    /// Cycles are told apart by member identity here, so a judge sharing a
    /// court with another member of an already-found cycle still counts.
    pub fn coverage(&self, config: &CoverageConfig) -> CoverageReport {
        let query = CycleQuery {
            signature: SignatureKey::Participants,
            ..CycleQuery::all()
        };
        let result = self.search(&query);
        let cycles: Vec<Cycle> = result.cycles.into_values().flatten().collect();
        analyze_coverage(&self.participants, &result.direct_swaps, &cycles, config)
    }

    /// Returns `false` when the filter is active and no participant at the
    /// origin lists the destination, so no cycle can realize the hop.
    fn route_feasible(&self, filter: &RouteFilter) -> bool {
        let Some((origin, destination)) = filter.route() else {
            return true;
        };
        let seekers = self.graph.seekers(destination);
        self.graph
            .residents(origin)
            .iter()
            .any(|p| seekers.contains(p))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn rec(name: &str, court: &str, desired: &[&str]) -> ParticipantRecord {
        ParticipantRecord::new(name, court, desired)
    }

    fn mixed() -> ExchangeEngine {
        ExchangeEngine::from_records(&[
            rec("A", "X", &["Y"]),
            rec("B", "Y", &["X", "Z"]),
            rec("C", "Z", &["W"]),
            rec("D", "W", &["Y"]),
            rec("E", "", &["X"]),
        ])
    }

    #[test]
    fn rows_without_court_are_dropped() {
        assert_eq!(mixed().participants().len(), 4);
    }

    #[test]
    fn search_collects_every_length() {
        let result = mixed().search(&CycleQuery::all());
        assert_eq!(result.direct_swaps.len(), 1);
        assert_eq!(result.cycles.get(&3).map(Vec::len), Some(1));
        assert_eq!(result.cycles.get(&4).map(Vec::len), Some(0));
        assert_eq!(result.cycles.keys().copied().collect::<Vec<_>>(), [3, 4, 5, 6]);
        assert_eq!(result.total(), 2);
    }

    #[test]
    fn infeasible_route_short_circuits() {
        let engine = mixed();
        let q = CycleQuery::for_route("X", "W");
        assert!(engine.search(&q).is_empty());
        assert!(engine.direct_swaps(&q.filter).is_empty());
    }

    #[test]
    fn route_filter_selects_matching_cycles() {
        let engine = mixed();
        let q = CycleQuery::for_route("Y", "Z");
        let result = engine.search(&q);
        assert!(result.direct_swaps.is_empty());
        assert_eq!(result.cycles.get(&3).map(Vec::len), Some(1));
    }

    #[test]
    fn summary_counts() {
        let summary = mixed().summary();
        assert_eq!(
            summary,
            NetworkSummary {
                participants: 4,
                courts: 4,
                preferences: 5,
                direct_swaps: 1,
            }
        );
    }

    #[test]
    fn coverage_uses_all_lengths() {
        let report = mixed().coverage(&CoverageConfig::default());
        assert!(report.not_involved.is_empty());
        assert_eq!(report.involved.len(), 4);
    }

    #[test]
    fn coverage_counts_judges_sharing_a_court_in_one_triangle() {
        let engine = ExchangeEngine::from_records(&[
            rec("A", "X", &["Y"]),
            rec("B", "Y", &["Z"]),
            rec("C", "Z", &["X"]),
            rec("A2", "X", &["Y"]),
        ]);
        assert_eq!(engine.cycles(3, &CycleQuery::all()).len(), 1);

        let report = engine.coverage(&CoverageConfig::default());
        assert!(report.not_involved.is_empty(), "{:?}", report.not_involved);
        assert!(report.involved.contains("A2"));
    }
}
