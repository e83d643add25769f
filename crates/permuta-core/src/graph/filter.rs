/// Origin→destination relevance filter for exchange results.
///
/// A querying judge supplies the court they sit at and the court they want.
/// A cycle is relevant to them when one of its hops moves somebody from that
/// origin to that destination. The filter never changes which cycles exist,
/// only which are surfaced.
use serde::Serialize;

use crate::graph::PreferenceGraph;
use crate::graph::cycles::{Cycle, DirectSwap};
use crate::normalize::normalize;

/// An optional `(origin, destination)` hop, stored normalized.
///
/// The filter is active only when both ends are given; with either one
/// missing every cycle passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteFilter {
    origin: Option<String>,
    destination: Option<String>,
}

impl RouteFilter {
    /// Builds a filter from raw court names. Blank names count as absent.
    pub fn new(origin: Option<&str>, destination: Option<&str>) -> Self {
        let clean = |s: Option<&str>| s.map(normalize).filter(|s| !s.is_empty());
        Self {
            origin: clean(origin),
            destination: clean(destination),
        }
    }

    /// A filter that lets everything through.
    pub fn none() -> Self {
        Self::default()
    }

    /// Shorthand for a filter on the hop `origin → destination`.
    pub fn hop(origin: &str, destination: &str) -> Self {
        Self::new(Some(origin), Some(destination))
    }

    /// Returns the active `(origin, destination)` pair, if both are set.
    pub fn route(&self) -> Option<(&str, &str)> {
        match (&self.origin, &self.destination) {
            (Some(o), Some(d)) => Some((o.as_str(), d.as_str())),
            (None, _) | (_, None) => None,
        }
    }

    /// Returns `true` if the filter restricts anything.
    pub fn is_active(&self) -> bool {
        self.route().is_some()
    }

    /// Checks a sequence of normalized court keys in cycle order.
    ///
    /// The sequence wraps: the last court hops back to the first.
    pub fn matches_courts<'a, I>(&self, courts: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let Some((origin, destination)) = self.route() else {
            return true;
        };
        let courts: Vec<&str> = courts.into_iter().collect();
        let k = courts.len();
        (0..k).any(|i| courts[i] == origin && courts[(i + 1) % k] == destination)
    }

    /// Checks a participant path (indices into the graph's snapshot).
    pub fn matches_path(&self, graph: &PreferenceGraph, path: &[usize]) -> bool {
        if !self.is_active() {
            return true;
        }
        self.matches_courts(path.iter().filter_map(|&p| graph.court_key(p)))
    }

    /// Checks a materialized cycle.
    pub fn matches(&self, cycle: &Cycle) -> bool {
        if !self.is_active() {
            return true;
        }
        let keys: Vec<String> = cycle
            .members()
            .iter()
            .map(|m| normalize(&m.current_court))
            .collect();
        self.matches_courts(keys.iter().map(String::as_str))
    }

    /// Checks a direct swap; either direction of the exchange qualifies.
    pub fn matches_swap(&self, swap: &DirectSwap) -> bool {
        if !self.is_active() {
            return true;
        }
        let a = normalize(&swap.current_court_a);
        let b = normalize(&swap.current_court_b);
        self.matches_courts([a.as_str(), b.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_unless_both_ends_given() {
        assert!(!RouteFilter::none().is_active());
        assert!(!RouteFilter::new(Some("X"), None).is_active());
        assert!(!RouteFilter::new(None, Some("Y")).is_active());
        assert!(!RouteFilter::new(Some("X"), Some("   ")).is_active());
        assert!(RouteFilter::hop("X", "Y").is_active());
    }

    #[test]
    fn inactive_filter_passes_everything() {
        assert!(RouteFilter::new(Some("X"), None).matches_courts(["a", "b"]));
        assert!(RouteFilter::none().matches_courts(std::iter::empty()));
    }

    #[test]
    fn matches_adjacent_hop_including_wraparound() {
        let f = RouteFilter::hop("W", "X");
        assert!(f.matches_courts(["x", "y", "z", "w"]));
        let f = RouteFilter::hop("Y", "Z");
        assert!(f.matches_courts(["x", "y", "z", "w"]));
    }

    #[test]
    fn direction_matters() {
        let f = RouteFilter::hop("Y", "X");
        assert!(!f.matches_courts(["x", "y", "z"]));
    }

    #[test]
    fn names_are_normalized() {
        let f = RouteFilter::hop(" São Paulo", "RECIFE");
        assert_eq!(f.route(), Some(("sao paulo", "recife")));
        assert!(f.matches_courts(["recife", "sao paulo"]));
    }
}
