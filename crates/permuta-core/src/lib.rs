#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod coverage;
pub mod engine;
pub mod graph;
pub mod normalize;
pub mod participant;
pub mod stats;

pub use coverage::{CoverageConfig, CoverageReport, analyze_coverage};
pub use engine::{CycleQuery, ExchangeEngine, NetworkSummary, SearchResult};
pub use graph::{
    CourtWeight, Cycle, CycleMember, CycleSignature, DirectSwap, MAX_CYCLE_LENGTH,
    MIN_CYCLE_LENGTH, PreferenceEdge, PreferenceGraph, RouteFilter, SignatureKey, build_cycle,
    build_graph, dedupe, direct_swaps, enumerate_cycles, find_cycles, signature,
};
pub use normalize::{normalize, normalize_opt, same_place};
pub use participant::{
    DEFAULT_BAND, MAX_DESTINATIONS, Participant, ParticipantRecord, participants_from_records,
};
pub use stats::{CourtStats, NetworkStats, StatsKey, StatsOptions, compute_stats};

/// Returns the current version of the permuta-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
