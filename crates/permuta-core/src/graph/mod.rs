/// Preference graph construction using `petgraph`, plus the exchange-cycle
/// algorithms that run over it.
///
/// Nodes are courts, keyed by their normalized name. Every non-blank entry in
/// a participant's destination list adds one directed edge from the
/// participant's current court to the desired court, weighted with the
/// participant that originates it. Several participants may produce parallel
/// edges between the same pair of courts; a cycle binds to one participant
/// per hop, so those multiplicities are kept.
///
/// # Construction
///
/// [`build_graph`] runs two passes over the participant slice:
/// 1. **Court pass**: interns every current and desired court, recording
///    `normalized name → NodeIndex` and, per court, the participants sitting
///    there (residents) and the participants asking for it (seekers).
/// 2. **Hop pass**: adds the preference edges, partitions the court graph
///    into strongly connected components, and derives each participant's
///    successor list: the participants whose court it wants, restricted to
///    its own component.
///
/// Participants are identified by their position in the slice passed to
/// [`build_graph`]; every index-returning method uses that numbering.
///
/// # Submodules
///
/// - [`cycles`]: direct swaps and bounded-length cycle enumeration.
/// - [`dedupe`]: rotation-invariant signatures and de-duplication.
/// - [`filter`]: origin→destination relevance filter.
pub mod cycles;
pub mod dedupe;
pub mod filter;

pub use cycles::{
    Cycle, CycleMember, DirectSwap, MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH, build_cycle,
    direct_swaps, enumerate_cycles, find_cycles,
};
pub use dedupe::{CycleSignature, SignatureKey, dedupe, signature};
pub use filter::RouteFilter;

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::normalize::normalize;
use crate::participant::Participant;

/// Weight stored on each court node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtWeight {
    /// Normalized comparison key.
    pub key: String,
    /// Spelling of the first occurrence seen in the dataset.
    pub label: String,
}

/// Weight stored on each preference edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceEdge {
    /// Index of the participant that wants to make this move.
    pub participant: usize,
    /// 1-based rank of the destination in the participant's list.
    pub priority: usize,
}

/// Directed court graph with participant-level adjacency indexes.
///
/// Construct with [`build_graph`].
#[derive(Debug)]
pub struct PreferenceGraph {
    graph: DiGraph<CourtWeight, PreferenceEdge>,
    court_index: HashMap<String, NodeIndex>,
    residents: HashMap<NodeIndex, Vec<usize>>,
    seekers: HashMap<NodeIndex, Vec<usize>>,
    /// Current court of each participant.
    court_of: Vec<NodeIndex>,
    /// Desired courts of each participant, aligned with
    /// [`Participant::desired_courts`].
    desired_of: Vec<Vec<NodeIndex>>,
    /// SCC id of each court node, indexed by `NodeIndex::index()`.
    component: Vec<usize>,
    successors: Vec<Vec<usize>>,
}

impl PreferenceGraph {
    /// Number of distinct courts (normalized).
    pub fn court_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of preference edges, excluding destinations equal to the
    /// participant's own court.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of participants the graph was built from.
    pub fn participant_count(&self) -> usize {
        self.court_of.len()
    }

    /// Underlying `petgraph` graph.
    pub fn graph(&self) -> &DiGraph<CourtWeight, PreferenceEdge> {
        &self.graph
    }

    /// Looks up a court by any spelling.
    pub fn court(&self, name: &str) -> Option<NodeIndex> {
        self.court_index.get(&normalize(name)).copied()
    }

    /// Court node of participant `p`.
    pub fn court_of(&self, p: usize) -> Option<NodeIndex> {
        self.court_of.get(p).copied()
    }

    /// Normalized key of participant `p`'s current court.
    pub fn court_key(&self, p: usize) -> Option<&str> {
        let idx = self.court_of(p)?;
        self.graph.node_weight(idx).map(|w| w.key.as_str())
    }

    /// Participants currently at `court` (any spelling), in input order.
    pub fn residents(&self, court: &str) -> &[usize] {
        self.court(court)
            .and_then(|idx| self.residents.get(&idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Participants listing `court` (any spelling) as a destination.
    pub fn seekers(&self, court: &str) -> &[usize] {
        self.court(court)
            .and_then(|idx| self.seekers.get(&idx))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Participants whose current court `p` wants, within `p`'s strongly
    /// connected component, in destination-priority then input order.
    pub fn successors(&self, p: usize) -> &[usize] {
        self.successors.get(p).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns `true` if participant `from` wants participant `to`'s court.
    pub fn wants(&self, from: usize, to: usize) -> bool {
        self.hop_index(from, to).is_some()
    }

    /// Position in `from`'s destination list of `to`'s current court.
    ///
    /// Index into [`Participant::desired_courts`]; `None` if `from` does not
    /// want that court or either index is out of range.
    pub fn hop_index(&self, from: usize, to: usize) -> Option<usize> {
        let target = self.court_of(to)?;
        self.desired_of.get(from)?.iter().position(|&d| d == target)
    }

    /// Returns `true` if `a` and `b` sit at the same court.
    pub fn same_court(&self, a: usize, b: usize) -> bool {
        match (self.court_of(a), self.court_of(b)) {
            (Some(x), Some(y)) => x == y,
            (None, _) | (_, None) => false,
        }
    }

    /// Returns `true` if participant `p`'s court lies on at least one
    /// directed court cycle, i.e. `p` can possibly take part in an exchange.
    pub fn in_exchange_component(&self, p: usize) -> bool {
        !self.successors(p).is_empty()
    }

    fn component_of(&self, idx: NodeIndex) -> Option<usize> {
        self.component.get(idx.index()).copied()
    }
}

/// Builds the [`PreferenceGraph`] for a participant snapshot.
///
/// Construction is O(P·D + C + E) for P participants with D ≤ 3 destinations
/// each, C courts and E preference edges, plus the successor lists whose size
/// depends on how many participants share each court.
pub fn build_graph(participants: &[Participant]) -> PreferenceGraph {
    let mut graph: DiGraph<CourtWeight, PreferenceEdge> = DiGraph::new();
    let mut court_index: HashMap<String, NodeIndex> = HashMap::new();

    let mut intern = |graph: &mut DiGraph<CourtWeight, PreferenceEdge>, name: &str| {
        let key = normalize(name);
        *court_index.entry(key.clone()).or_insert_with(|| {
            graph.add_node(CourtWeight {
                key,
                label: name.to_owned(),
            })
        })
    };

    // Court pass.
    let mut residents: HashMap<NodeIndex, Vec<usize>> = HashMap::new();
    let mut seekers: HashMap<NodeIndex, Vec<usize>> = HashMap::new();
    let mut court_of = Vec::with_capacity(participants.len());
    let mut desired_of = Vec::with_capacity(participants.len());

    for (p, participant) in participants.iter().enumerate() {
        let here = intern(&mut graph, participant.current_court());
        residents.entry(here).or_default().push(p);
        court_of.push(here);

        let mut wanted = Vec::with_capacity(participant.desired_courts().len());
        for dest in participant.desired_courts() {
            let there = intern(&mut graph, dest);
            let list = seekers.entry(there).or_default();
            if list.last() != Some(&p) {
                list.push(p);
            }
            wanted.push(there);
        }
        desired_of.push(wanted);
    }

    // Hop pass.
    for (p, wanted) in desired_of.iter().enumerate() {
        let here = court_of[p];
        for (rank, &there) in wanted.iter().enumerate() {
            if there != here {
                graph.add_edge(
                    here,
                    there,
                    PreferenceEdge {
                        participant: p,
                        priority: rank + 1,
                    },
                );
            }
        }
    }

    let mut component = vec![0; graph.node_count()];
    for (id, scc) in tarjan_scc(&graph).into_iter().enumerate() {
        for idx in scc {
            component[idx.index()] = id;
        }
    }

    let mut pg = PreferenceGraph {
        graph,
        court_index,
        residents,
        seekers,
        court_of,
        desired_of,
        component,
        successors: Vec::new(),
    };
    pg.successors = (0..participants.len())
        .map(|p| successor_list(&pg, p))
        .collect();

    tracing::debug!(
        participants = participants.len(),
        courts = pg.court_count(),
        edges = pg.edge_count(),
        "built preference graph"
    );
    pg
}

/// Participants `p` could hand its court to, confined to `p`'s component.
///
/// A hop that leaves the strongly connected component of `p`'s court can
/// never close back, so it is dropped here rather than explored later.
fn successor_list(pg: &PreferenceGraph, p: usize) -> Vec<usize> {
    let here = pg.court_of[p];
    let home = pg.component_of(here);
    let mut out: Vec<usize> = Vec::new();
    let mut seen_courts: Vec<NodeIndex> = Vec::new();

    for &there in &pg.desired_of[p] {
        if there == here || seen_courts.contains(&there) {
            continue;
        }
        seen_courts.push(there);
        if pg.component_of(there) != home {
            continue;
        }
        if let Some(list) = pg.residents.get(&there) {
            out.extend(list.iter().copied());
        }
    }
    out
}
