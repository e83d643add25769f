/// Participant model: one judge's current court and ranked destinations.
///
/// A [`ParticipantRecord`] is the raw row handed over by whatever loads the
/// dataset; [`Participant`] is the trimmed, immutable form the engine works
/// with. Within one snapshot a participant's identity is its position in the
/// participant slice, so two rows with the same name are still two people.
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// Band assigned when the source row leaves the column blank.
pub const DEFAULT_BAND: &str = "unspecified";

/// Maximum number of ranked destinations per participant.
pub const MAX_DESTINATIONS: usize = 3;

// ---------------------------------------------------------------------------
// ParticipantRecord
// ---------------------------------------------------------------------------

/// One raw input row, as read from a spreadsheet or CSV file.
///
/// Every field is optional; missing values degrade to empty strings or to
/// [`DEFAULT_BAND`] when converted into a [`Participant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Participant's display name.
    pub name: Option<String>,
    /// Court the participant currently sits at.
    pub current_court: Option<String>,
    /// First-choice destination.
    pub destination_1: Option<String>,
    /// Second-choice destination.
    pub destination_2: Option<String>,
    /// Third-choice destination.
    pub destination_3: Option<String>,
    /// Free-text seniority classification.
    pub band: Option<String>,
}

impl ParticipantRecord {
    /// Convenience constructor used by tests and generators.
    pub fn new(name: &str, current_court: &str, destinations: &[&str]) -> Self {
        let dest = |i: usize| destinations.get(i).map(|d| (*d).to_owned());
        Self {
            name: Some(name.to_owned()),
            current_court: Some(current_court.to_owned()),
            destination_1: dest(0),
            destination_2: dest(1),
            destination_3: dest(2),
            band: None,
        }
    }

    /// Returns the record with `band` set.
    #[must_use]
    pub fn with_band(mut self, band: &str) -> Self {
        self.band = Some(band.to_owned());
        self
    }

    /// Destination columns in priority order.
    pub fn destinations(&self) -> [Option<&str>; MAX_DESTINATIONS] {
        [
            self.destination_1.as_deref(),
            self.destination_2.as_deref(),
            self.destination_3.as_deref(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Participant
// ---------------------------------------------------------------------------

/// A judge taking part in the exchange.
///
/// Immutable after construction. `current_court` is guaranteed non-empty
/// after normalization and `desired_courts` holds only non-blank entries,
/// in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: String,
    current_court: String,
    desired_courts: Vec<String>,
    band: String,
}

impl Participant {
    /// Builds a participant from already-split fields.
    ///
    /// Returns `None` when `current_court` is blank after normalization.
    /// Destinations beyond [`MAX_DESTINATIONS`] are ignored.
    pub fn new<S: AsRef<str>>(
        name: &str,
        current_court: &str,
        desired_courts: &[S],
        band: Option<&str>,
    ) -> Option<Self> {
        let current_court = current_court.trim();
        if normalize(current_court).is_empty() {
            return None;
        }
        let desired_courts = desired_courts
            .iter()
            .take(MAX_DESTINATIONS)
            .map(|d| d.as_ref().trim())
            .filter(|d| !d.is_empty())
            .map(str::to_owned)
            .collect();
        let band = band
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BAND);
        Some(Self {
            name: name.trim().to_owned(),
            current_court: current_court.to_owned(),
            desired_courts,
            band: band.to_owned(),
        })
    }

    /// Builds a participant from a raw row.
    ///
    /// Returns `None` when the row has no usable current court.
    pub fn from_record(record: &ParticipantRecord) -> Option<Self> {
        let desired: Vec<&str> = record.destinations().into_iter().flatten().collect();
        Self::new(
            record.name.as_deref().unwrap_or_default(),
            record.current_court.as_deref().unwrap_or_default(),
            &desired,
            record.band.as_deref(),
        )
    }

    /// Display name, trimmed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current court, trimmed but otherwise as written in the source.
    pub fn current_court(&self) -> &str {
        &self.current_court
    }

    /// Desired courts in priority order (at most [`MAX_DESTINATIONS`]).
    pub fn desired_courts(&self) -> &[String] {
        &self.desired_courts
    }

    /// Seniority band, or [`DEFAULT_BAND`].
    pub fn band(&self) -> &str {
        &self.band
    }

    /// Returns `true` if `court` is one of this participant's destinations.
    pub fn wants_to_go_to(&self, court: &str) -> bool {
        self.matched_destination(court).is_some()
    }

    /// Returns the destination entry (original spelling) equal to `court`
    /// under normalization, honouring priority order.
    pub fn matched_destination(&self, court: &str) -> Option<&str> {
        let key = normalize(court);
        self.desired_courts
            .iter()
            .find(|d| normalize(d) == key)
            .map(String::as_str)
    }

    /// 1-based priority of `court` among this participant's destinations.
    pub fn priority_of(&self, court: &str) -> Option<usize> {
        let key = normalize(court);
        self.desired_courts
            .iter()
            .position(|d| normalize(d) == key)
            .map(|p| p + 1)
    }

    /// Returns the record this participant would round-trip to.
    pub fn to_record(&self) -> ParticipantRecord {
        let dest = |i: usize| self.desired_courts.get(i).cloned();
        ParticipantRecord {
            name: Some(self.name.clone()),
            current_court: Some(self.current_court.clone()),
            destination_1: dest(0),
            destination_2: dest(1),
            destination_3: dest(2),
            band: Some(self.band.clone()),
        }
    }
}

/// Converts raw rows into participants, skipping rows without a court.
pub fn participants_from_records<'a, I>(records: I) -> Vec<Participant>
where
    I: IntoIterator<Item = &'a ParticipantRecord>,
{
    let mut participants = Vec::new();
    for (row, record) in records.into_iter().enumerate() {
        match Participant::from_record(record) {
            Some(p) => participants.push(p),
            None => tracing::debug!(row, name = ?record.name, "skipping row without a current court"),
        }
    }
    participants
}
