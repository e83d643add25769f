/// Header recognition shared by the workbook and CSV readers.
///
/// Headers are compared after [`normalize`], so `"Entrância"`, `"ENTRANCIA"`
/// and `" entrancia "` all name the band column. Unknown columns (such as
/// `E-mail`) are ignored.
use permuta_core::{MAX_DESTINATIONS, ParticipantRecord, normalize};

use crate::error::ImportError;

/// Canonical header of the participant name column.
pub const HEADER_NAME: &str = "Nome";
/// Canonical header of the current court column.
pub const HEADER_COURT: &str = "Origem";
/// Canonical headers of the ranked destination columns.
pub const HEADER_DESTINATIONS: [&str; MAX_DESTINATIONS] = ["Destino 1", "Destino 2", "Destino 3"];
/// Canonical header of the career band column.
pub const HEADER_BAND: &str = "Entrância";

const NAME_ALIASES: &[&str] = &["nome", "name"];
const COURT_ALIASES: &[&str] = &["origem", "origin", "current_court", "current court"];
const BAND_ALIASES: &[&str] = &["entrancia", "band"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Court,
    Destination(usize),
    Band,
}

fn classify(header: &str) -> Option<Column> {
    let key = normalize(header);
    if NAME_ALIASES.contains(&key.as_str()) {
        Some(Column::Name)
    } else if COURT_ALIASES.contains(&key.as_str()) {
        Some(Column::Court)
    } else if BAND_ALIASES.contains(&key.as_str()) {
        Some(Column::Band)
    } else {
        destination_slot(&key).map(Column::Destination)
    }
}

/// Zero-based slot for `destino 1`, `destino1`, `destination_1` and the like.
fn destination_slot(key: &str) -> Option<usize> {
    let rest = key
        .strip_prefix("destino")
        .or_else(|| key.strip_prefix("destination"))?;
    let n: usize = rest.trim_start_matches([' ', '_']).parse().ok()?;
    (1..=MAX_DESTINATIONS).contains(&n).then(|| n - 1)
}

/// Column positions resolved from a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    name: usize,
    court: usize,
    destinations: [Option<usize>; MAX_DESTINATIONS],
    band: Option<usize>,
}

impl ColumnMap {
    /// Resolves `headers` (in column order). The first column matching an
    /// alias wins.
    ///
    /// # Errors
    ///
    /// [`ImportError::MissingColumn`] when the name or court column is absent.
    pub(crate) fn from_headers<I, S>(headers: I, table: &str) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut name = None;
        let mut court = None;
        let mut destinations = [None; MAX_DESTINATIONS];
        let mut band = None;

        for (idx, header) in headers.into_iter().enumerate() {
            let header = header.as_ref();
            let slot = match classify(header) {
                Some(Column::Name) => &mut name,
                Some(Column::Court) => &mut court,
                Some(Column::Band) => &mut band,
                Some(Column::Destination(i)) => match destinations.get_mut(i) {
                    Some(slot) => slot,
                    None => continue,
                },
                None => {
                    tracing::trace!(header, "ignoring column");
                    continue;
                }
            };
            slot.get_or_insert(idx);
        }

        let missing = |column: &str| ImportError::MissingColumn {
            table: table.to_owned(),
            column: column.to_owned(),
        };
        Ok(Self {
            name: name.ok_or_else(|| missing(HEADER_NAME))?,
            court: court.ok_or_else(|| missing(HEADER_COURT))?,
            destinations,
            band,
        })
    }

    /// Builds a record from one data row, or `None` for a blank row.
    pub(crate) fn record<S: AsRef<str>>(&self, row: &[S]) -> Option<ParticipantRecord> {
        let cell = |idx: Option<usize>| -> Option<String> {
            let value = row.get(idx?)?.as_ref().trim();
            (!value.is_empty()).then(|| value.to_owned())
        };
        let [d1, d2, d3] = self.destinations;
        let record = ParticipantRecord {
            name: cell(Some(self.name)),
            current_court: cell(Some(self.court)),
            destination_1: cell(d1),
            destination_2: cell(d2),
            destination_3: cell(d3),
            band: cell(self.band),
        };
        (record != ParticipantRecord::default()).then_some(record)
    }
}
