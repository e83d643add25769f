/// Exchange-cycle enumeration over a [`PreferenceGraph`].
///
/// An exchange cycle of length `k` is a sequence of `k` participants in
/// which each one wants the next one's court and the last wants the first's.
/// No participant appears twice and no two members share a court.
///
/// # Strategies
///
/// | Length | Strategy |
/// |---|---|
/// | 2 | Unordered pairs checked in both directions ([`direct_swaps`]). |
/// | 3 | Ordered triples walked through the successor index. |
/// | 4–6 | Depth-first backtracking from every participant as head. |
///
/// The enumerators report a cycle once per rotation (and, for triangles, per
/// entry point), so [`find_cycles`] passes the raw paths through
/// [`dedupe`](crate::graph::dedupe) before building result records.
///
/// # Cost
///
/// Backtracking is exponential in the cycle length: every simple path of up
/// to `k` hops through the successor index is visited. The length is capped
/// at [`MAX_CYCLE_LENGTH`] and hops leaving a strongly connected component
/// are pruned at graph construction, which keeps the search practical for a
/// closed group of a few thousand participants. Arbitrary scale-up needs a
/// different algorithm (for example Johnson's elementary-circuit search).
use std::collections::HashSet;

use serde::Serialize;

use crate::graph::PreferenceGraph;
use crate::graph::dedupe::{SignatureKey, path_signature};
use crate::graph::filter::RouteFilter;
use crate::participant::Participant;

/// Shortest exchange: a direct swap.
pub const MIN_CYCLE_LENGTH: usize = 2;

/// Longest exchange the enumerator will search for.
pub const MAX_CYCLE_LENGTH: usize = 6;

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// A mutual two-way swap between participants `a` and `b`.
///
/// `matched_destination_*` is the destination entry that matched the other
/// participant's court, which is not necessarily a first choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectSwap {
    /// Snapshot index of participant A.
    #[serde(skip)]
    pub index_a: usize,
    /// Name of participant A.
    pub participant_a: String,
    /// Band of participant A.
    pub band_a: String,
    /// Court participant A leaves.
    pub current_court_a: String,
    /// Destination of A, as spelled in A's list.
    pub matched_destination_a: String,
    /// Snapshot index of participant B.
    #[serde(skip)]
    pub index_b: usize,
    /// Name of participant B.
    pub participant_b: String,
    /// Band of participant B.
    pub band_b: String,
    /// Court participant B leaves.
    pub current_court_b: String,
    /// Destination of B, as spelled in B's list.
    pub matched_destination_b: String,
}

/// One participant's place in a [`Cycle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleMember {
    /// Participant name.
    pub name: String,
    /// Participant band.
    pub band: String,
    /// Court the participant leaves.
    pub current_court: String,
    /// Court the participant moves to, as spelled in their own list; equal
    /// under normalization to the next member's `current_court`.
    pub next_hop_court: String,
}

/// An exchange cycle, members in hop order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cycle {
    #[serde(skip)]
    participants: Vec<usize>,
    members: Vec<CycleMember>,
}

impl Cycle {
    /// Snapshot indices of the members, in hop order.
    pub fn participants(&self) -> &[usize] {
        &self.participants
    }

    /// Member records, in hop order.
    pub fn members(&self) -> &[CycleMember] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false` for cycles produced by this module.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Builds the record for a participant path.
///
/// Returns `None` unless `path` is a valid exchange cycle: at least
/// [`MIN_CYCLE_LENGTH`] members, every index in range, distinct members
/// and courts, and every hop (including the closing one) wanted.
pub fn build_cycle(
    participants: &[Participant],
    graph: &PreferenceGraph,
    path: &[usize],
) -> Option<Cycle> {
    let k = path.len();
    if k < MIN_CYCLE_LENGTH {
        return None;
    }
    for (i, &a) in path.iter().enumerate() {
        if path[i + 1..].iter().any(|&b| graph.same_court(a, b)) {
            return None;
        }
    }
    let mut members = Vec::with_capacity(k);
    for (i, &p) in path.iter().enumerate() {
        let next = path[(i + 1) % k];
        let participant = participants.get(p)?;
        let hop = graph.hop_index(p, next)?;
        let next_hop_court = participant.desired_courts().get(hop)?;
        members.push(CycleMember {
            name: participant.name().to_owned(),
            band: participant.band().to_owned(),
            current_court: participant.current_court().to_owned(),
            next_hop_court: next_hop_court.clone(),
        });
    }
    Some(Cycle {
        participants: path.to_vec(),
        members,
    })
}

// ---------------------------------------------------------------------------
// Length 2: direct swaps
// ---------------------------------------------------------------------------

/// Unordered pairs `(a, b)`, `a < b`, that want each other's courts.
///
/// Pairs come out in the same order as a nested `for a { for b > a }` scan.
fn swap_pairs(graph: &PreferenceGraph) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut partners: Vec<usize> = Vec::new();
    for a in 0..graph.participant_count() {
        partners.clear();
        partners.extend(
            graph
                .successors(a)
                .iter()
                .copied()
                .filter(|&b| b > a && graph.wants(b, a)),
        );
        partners.sort_unstable();
        pairs.extend(partners.iter().map(|&b| (a, b)));
    }
    pairs
}

/// Finds every direct swap, each unordered pair reported exactly once.
///
/// When `filter` is active, only swaps in which one side makes the filtered
/// hop are returned.
pub fn direct_swaps(
    participants: &[Participant],
    graph: &PreferenceGraph,
    filter: &RouteFilter,
) -> Vec<DirectSwap> {
    let mut swaps = Vec::new();
    for (a, b) in swap_pairs(graph) {
        if !filter.matches_path(graph, &[a, b]) {
            continue;
        }
        let (Some(pa), Some(pb)) = (participants.get(a), participants.get(b)) else {
            continue;
        };
        let dest_a = graph
            .hop_index(a, b)
            .and_then(|i| pa.desired_courts().get(i));
        let dest_b = graph
            .hop_index(b, a)
            .and_then(|i| pb.desired_courts().get(i));
        let (Some(dest_a), Some(dest_b)) = (dest_a, dest_b) else {
            continue;
        };
        swaps.push(DirectSwap {
            index_a: a,
            participant_a: pa.name().to_owned(),
            band_a: pa.band().to_owned(),
            current_court_a: pa.current_court().to_owned(),
            matched_destination_a: dest_a.clone(),
            index_b: b,
            participant_b: pb.name().to_owned(),
            band_b: pb.band().to_owned(),
            current_court_b: pb.current_court().to_owned(),
            matched_destination_b: dest_b.clone(),
        });
    }
    swaps
}

// ---------------------------------------------------------------------------
// Length 3: triangles
// ---------------------------------------------------------------------------

/// Ordered triples `a → b → c → a`; each triangle appears once per rotation.
fn triangle_paths(graph: &PreferenceGraph, filter: &RouteFilter, out: &mut Vec<Vec<usize>>) {
    for a in 0..graph.participant_count() {
        for &b in graph.successors(a) {
            for &c in graph.successors(b) {
                if c == a || graph.same_court(c, a) {
                    continue;
                }
                if graph.wants(c, a) && filter.matches_path(graph, &[a, b, c]) {
                    out.push(vec![a, b, c]);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Length >= 4: backtracking
// ---------------------------------------------------------------------------

/// Depth-first search for closed paths of exactly `length` participants.
///
/// Iterative DFS with an explicit stack of `(participant, next child)`
/// frames. A candidate child is rejected when it, or another participant at
/// its court, is already on the path. Once the path is full the closing hop
/// back to the head is checked and the frame is popped.
fn ring_paths(
    graph: &PreferenceGraph,
    length: usize,
    filter: &RouteFilter,
    out: &mut Vec<Vec<usize>>,
) {
    let mut path: Vec<usize> = Vec::with_capacity(length);
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(length);

    for head in 0..graph.participant_count() {
        if !graph.in_exchange_component(head) {
            continue;
        }
        path.push(head);
        stack.push((head, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;

            if path.len() == length {
                if graph.wants(node, head) && filter.matches_path(graph, &path) {
                    out.push(path.clone());
                }
                stack.pop();
                path.pop();
                continue;
            }

            let Some(&child) = graph.successors(node).get(frame.1) else {
                stack.pop();
                path.pop();
                continue;
            };
            frame.1 += 1;

            if path
                .iter()
                .any(|&q| q == child || graph.same_court(q, child))
            {
                continue;
            }
            path.push(child);
            stack.push((child, 0));
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Enumerates raw cycle paths of exactly `length` participants.
///
/// Paths are snapshot indices in hop order and still contain the rotations
/// and repeated discoveries of each cycle. Lengths below
/// [`MIN_CYCLE_LENGTH`], above [`MAX_CYCLE_LENGTH`], or above the number of
/// participants yield an empty result.
pub fn enumerate_cycles(
    graph: &PreferenceGraph,
    length: usize,
    filter: &RouteFilter,
) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if length < MIN_CYCLE_LENGTH || length > graph.participant_count() {
        return out;
    }
    if length > MAX_CYCLE_LENGTH {
        tracing::warn!(
            length,
            max = MAX_CYCLE_LENGTH,
            "cycle length above the supported maximum; returning no cycles"
        );
        return out;
    }

    match length {
        2 => out.extend(
            swap_pairs(graph)
                .into_iter()
                .map(|(a, b)| vec![a, b])
                .filter(|path| filter.matches_path(graph, path)),
        ),
        3 => triangle_paths(graph, filter, &mut out),
        _ => ring_paths(graph, length, filter, &mut out),
    }

    tracing::debug!(length, raw = out.len(), "enumerated cycle paths");
    out
}

/// Finds the distinct exchange cycles of exactly `length` participants.
///
/// Runs [`enumerate_cycles`], keeps the first path seen per signature (see
/// [`SignatureKey`]) and builds one [`Cycle`] record for each survivor, in
/// first-seen order.
///
/// The filter is applied to the raw paths, so the survivor for a signature is
/// a rotation that realizes the hop. Every signature in a filtered result is
/// also in the unfiltered one; the member order may differ.
pub fn find_cycles(
    participants: &[Participant],
    graph: &PreferenceGraph,
    length: usize,
    filter: &RouteFilter,
    key: SignatureKey,
) -> Vec<Cycle> {
    let mut seen = HashSet::new();
    enumerate_cycles(graph, length, filter)
        .into_iter()
        .filter(|path| seen.insert(path_signature(graph, path, key)))
        .filter_map(|path| build_cycle(participants, graph, &path))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
