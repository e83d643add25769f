/// Rotation-invariant cycle signatures and first-seen de-duplication.
///
/// The enumerators discover each cycle once per starting member, so the raw
/// output holds every rotation of every cycle. A signature maps all of those
/// sequences to one key.
///
/// # Signature keys
///
/// - [`SignatureKey::Courts`] (default): the sorted normalized courts of the
///   members. Two cycles over the same set of courts collapse to one entry
///   even when different judges (sharing a court elsewhere in the dataset)
///   form them, and the two orientations of a fully connected triangle
///   collapse as well.
/// - [`SignatureKey::Participants`]: the member indices rotated so the
///   smallest comes first. Distinct judges always give distinct cycles and
///   orientation is preserved.
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::PreferenceGraph;
use crate::graph::cycles::Cycle;
use crate::normalize::normalize;

/// What a cycle signature is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureKey {
    /// Sorted multiset of normalized member courts.
    #[default]
    Courts,
    /// Member identities in canonical rotation.
    Participants,
}

/// Canonical form of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CycleSignature {
    /// Sorted normalized court names.
    Courts(Vec<String>),
    /// Participant indices starting from the smallest, in hop order.
    Participants(Vec<usize>),
}

/// Computes the signature of a materialized cycle.
pub fn signature(cycle: &Cycle, key: SignatureKey) -> CycleSignature {
    match key {
        SignatureKey::Courts => {
            let mut courts: Vec<String> = cycle
                .members()
                .iter()
                .map(|m| normalize(&m.current_court))
                .collect();
            courts.sort_unstable();
            CycleSignature::Courts(courts)
        }
        SignatureKey::Participants => {
            CycleSignature::Participants(canonical_rotation(cycle.participants()))
        }
    }
}

/// Computes the signature of a raw path without building the record.
///
/// Agrees with [`signature`] on the cycle built from the same path.
pub(crate) fn path_signature(
    graph: &PreferenceGraph,
    path: &[usize],
    key: SignatureKey,
) -> CycleSignature {
    match key {
        SignatureKey::Courts => {
            let mut courts: Vec<String> = path
                .iter()
                .filter_map(|&p| graph.court_key(p))
                .map(str::to_owned)
                .collect();
            courts.sort_unstable();
            CycleSignature::Courts(courts)
        }
        SignatureKey::Participants => CycleSignature::Participants(canonical_rotation(path)),
    }
}

fn canonical_rotation(path: &[usize]) -> Vec<usize> {
    let start = path
        .iter()
        .enumerate()
        .min_by_key(|&(_, p)| *p)
        .map_or(0, |(i, _)| i);
    path[start..].iter().chain(&path[..start]).copied().collect()
}

/// Keeps the first cycle seen per signature, preserving input order.
pub fn dedupe(cycles: Vec<Cycle>, key: SignatureKey) -> Vec<Cycle> {
    let mut seen = HashSet::new();
    cycles
        .into_iter()
        .filter(|c| seen.insert(signature(c, key)))
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::graph::{RouteFilter, build_cycle, build_graph, enumerate_cycles};
    use crate::participant::Participant;

    fn p(name: &str, court: &str, desired: &[&str]) -> Participant {
        Participant::new(name, court, desired, None).expect("valid participant")
    }

    /// Every court wants both others: two orientations of one triangle.
    fn full_triangle() -> Vec<Participant> {
        vec![
            p("A", "X", &["Y", "Z"]),
            p("B", "Y", &["Z", "X"]),
            p("C", "Z", &["X", "Y"]),
        ]
    }

    fn raw_cycles(participants: &[Participant], length: usize) -> Vec<Cycle> {
        let g = build_graph(participants);
        enumerate_cycles(&g, length, &RouteFilter::none())
            .iter()
            .map(|path| build_cycle(participants, &g, path).expect("valid cycle"))
            .collect()
    }

    #[test]
    fn rotations_share_a_signature() {
        let cycles = raw_cycles(&full_triangle(), 3);
        assert_eq!(cycles.len(), 6);
        for key in [SignatureKey::Courts, SignatureKey::Participants] {
            let a = signature(&cycles[0], key);
            let rotated = cycles
                .iter()
                .filter(|c| signature(c, key) == a)
                .count();
            let expected = match key {
                SignatureKey::Courts => 6,
                SignatureKey::Participants => 3,
            };
            assert_eq!(rotated, expected, "{key:?}");
        }
    }

    #[test]
    fn court_key_collapses_orientations() {
        let cycles = raw_cycles(&full_triangle(), 3);
        assert_eq!(dedupe(cycles, SignatureKey::Courts).len(), 1);
    }

    #[test]
    fn participant_key_keeps_orientations() {
        let cycles = raw_cycles(&full_triangle(), 3);
        assert_eq!(dedupe(cycles, SignatureKey::Participants).len(), 2);
    }

    #[test]
    fn court_key_collapses_different_judges_on_the_same_courts() {
        let participants = vec![
            p("A", "X", &["Y"]),
            p("B", "Y", &["X"]),
            p("C", "X", &["Y"]),
        ];
        let cycles = raw_cycles(&participants, 2);
        assert_eq!(cycles.len(), 2);
        assert_eq!(dedupe(cycles.clone(), SignatureKey::Courts).len(), 1);
        assert_eq!(dedupe(cycles, SignatureKey::Participants).len(), 2);
    }

    #[test]
    fn dedupe_keeps_first_seen_and_is_idempotent() {
        let cycles = raw_cycles(&full_triangle(), 3);
        let first = cycles[0].clone();
        let once = dedupe(cycles, SignatureKey::Courts);
        assert_eq!(once[0], first);
        let twice = dedupe(once.clone(), SignatureKey::Courts);
        assert_eq!(once, twice);
    }

    #[test]
    fn path_and_record_signatures_agree() {
        let participants = full_triangle();
        let g = build_graph(&participants);
        for path in enumerate_cycles(&g, 3, &RouteFilter::none()) {
            let cycle = build_cycle(&participants, &g, &path).expect("valid cycle");
            for key in [SignatureKey::Courts, SignatureKey::Participants] {
                assert_eq!(path_signature(&g, &path, key), signature(&cycle, key));
            }
        }
    }

    #[test]
    fn canonical_rotation_starts_at_minimum() {
        assert_eq!(canonical_rotation(&[3, 1, 2]), [1, 2, 3]);
        assert_eq!(canonical_rotation(&[1, 3, 2]), [1, 3, 2]);
        assert!(canonical_rotation(&[]).is_empty());
    }
}
