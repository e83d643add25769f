/// Network statistics: per-court demand, supply and connectivity.
///
/// For every participant the current court gains one export and every
/// listed destination gains one request. Connectivity is the sum of the
/// two. Results are recomputed from the full participant list on demand.
///
/// # Court keys
///
/// By default courts are keyed by their text as written in the source
/// ([`StatsKey::Raw`]), so `"TJSP"` and `"tjsp "` land in different buckets
/// even though the cycle engine treats them as one court. Pass
/// [`StatsKey::Normalized`] to merge spelling variants; the bucket is then
/// labelled with the first spelling seen.
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::participant::Participant;

/// How court names are keyed when aggregating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsKey {
    /// Court text as it appears in the data (trimmed).
    #[default]
    Raw,
    /// Normalized court name; label is the first spelling seen.
    Normalized,
}

/// Aggregation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// Court keying policy.
    pub key: StatsKey,
}

/// Counters for one court.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CourtStats {
    /// How many destination entries name this court.
    pub requested: usize,
    /// How many participants currently sit at this court.
    pub exported: usize,
    /// `requested + exported`.
    pub connectivity: usize,
}

/// Per-court statistics for a participant snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetworkStats {
    courts: BTreeMap<String, CourtStats>,
}

impl NetworkStats {
    /// Statistics for one court label, if present.
    pub fn get(&self, court: &str) -> Option<&CourtStats> {
        self.courts.get(court)
    }

    /// All courts, ordered by label.
    pub fn courts(&self) -> &BTreeMap<String, CourtStats> {
        &self.courts
    }

    /// Number of distinct court buckets.
    pub fn len(&self) -> usize {
        self.courts.len()
    }

    /// Returns `true` when no participant contributed anything.
    pub fn is_empty(&self) -> bool {
        self.courts.is_empty()
    }

    /// Sum of `requested` over all courts.
    pub fn total_requested(&self) -> usize {
        self.courts.values().map(|s| s.requested).sum()
    }

    /// Sum of `exported` over all courts.
    pub fn total_exported(&self) -> usize {
        self.courts.values().map(|s| s.exported).sum()
    }

    /// Up to `n` courts with the highest request count.
    pub fn most_requested(&self, n: usize) -> Vec<(&str, usize)> {
        self.top_by(n, |s| s.requested)
    }

    /// Up to `n` courts the most participants want to leave.
    pub fn most_exporting(&self, n: usize) -> Vec<(&str, usize)> {
        self.top_by(n, |s| s.exported)
    }

    /// Up to `n` courts with the highest connectivity.
    pub fn most_connected(&self, n: usize) -> Vec<(&str, usize)> {
        self.top_by(n, |s| s.connectivity)
    }

    /// Descending by metric, ties by label; zero counts are left out.
    fn top_by<F>(&self, n: usize, metric: F) -> Vec<(&str, usize)>
    where
        F: Fn(&CourtStats) -> usize,
    {
        let mut ranked: Vec<(&str, usize)> = self
            .courts
            .iter()
            .map(|(court, s)| (court.as_str(), metric(s)))
            .filter(|&(_, v)| v > 0)
            .collect();
        // BTreeMap iteration is already label-ordered; a stable sort keeps it.
        ranked.sort_by_key(|&(_, v)| Reverse(v));
        ranked.truncate(n);
        ranked
    }
}

/// Computes per-court statistics for `participants`.
pub fn compute_stats(participants: &[Participant], options: StatsOptions) -> NetworkStats {
    let mut labels: HashMap<String, String> = HashMap::new();
    let mut label_for = |court: &str| -> String {
        match options.key {
            StatsKey::Raw => court.to_owned(),
            StatsKey::Normalized => labels
                .entry(normalize(court))
                .or_insert_with(|| court.to_owned())
                .clone(),
        }
    };

    let mut courts: BTreeMap<String, CourtStats> = BTreeMap::new();
    for participant in participants {
        courts
            .entry(label_for(participant.current_court()))
            .or_default()
            .exported += 1;
        for dest in participant.desired_courts() {
            courts.entry(label_for(dest)).or_default().requested += 1;
        }
    }
    for stats in courts.values_mut() {
        stats.connectivity = stats.requested + stats.exported;
    }
    NetworkStats { courts }
}
