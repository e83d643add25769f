//! Participant snapshot generator.
//!
//! Courts are laid out on a ring; with probability
//! [`GeneratorConfig::locality`] a destination is drawn from the courts near
//! the participant's own, which produces the short cycles real preference
//! data is full of. The rest are drawn uniformly. Court labels are written
//! in several spellings so the normalizer is exercised on every run.

use permuta_core::{MAX_DESTINATIONS, Participant, ParticipantRecord, participants_from_records};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CITIES: [&str; 12] = [
    "São Paulo",
    "Goiânia",
    "Brasília",
    "Belém",
    "Maceió",
    "Florianópolis",
    "Cuiabá",
    "Vitória",
    "Teresina",
    "Macapá",
    "Niterói",
    "Ribeirão Preto",
];

const BANDS: [&str; 4] = ["Inicial", "Intermediária", "Final", "Especial"];

/// Configuration for the participant generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of participants (rows).
    pub num_participants: usize,
    /// Number of distinct courts.
    pub num_courts: usize,
    /// Courts on either side of a participant's own that count as nearby.
    pub neighborhood: usize,
    /// Probability a destination is drawn from the neighborhood (0.0-1.0).
    pub locality: f64,
    /// Probability a court label is written in a variant spelling (0.0-1.0).
    pub spelling_noise: f64,
    /// Probability a row leaves the band column blank (0.0-1.0).
    pub blank_band: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 60 participants over 12 courts.
    Small,
    /// 400 participants over 40 courts.
    Medium,
    /// 1500 participants over 120 courts.
    Large,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_participants, num_courts, neighborhood) = match self {
            SizeTier::Small => (60, 12, 2),
            SizeTier::Medium => (400, 40, 3),
            SizeTier::Large => (1500, 120, 4),
        };
        GeneratorConfig {
            seed,
            num_participants,
            num_courts,
            neighborhood,
            locality: 0.7,
            spelling_noise: 0.2,
            blank_band: 0.3,
        }
    }
}

fn court_label(i: usize) -> String {
    let city = CITIES[i % CITIES.len()];
    match i / CITIES.len() {
        0 => city.to_owned(),
        round => format!("{city} {round}"),
    }
}

/// Same court, different spelling: shouted, padded, or stripped of accents
/// the way a hurried typist would.
fn variant(label: &str, rng: &mut StdRng) -> String {
    match rng.gen_range(0..3) {
        0 => label.to_uppercase(),
        1 => format!(" {label} "),
        _ => label
            .chars()
            .map(|c| match c {
                'ã' | 'â' | 'á' => 'a',
                'é' | 'ê' => 'e',
                'í' => 'i',
                'ó' | 'ô' => 'o',
                'ú' => 'u',
                'ç' => 'c',
                other => other,
            })
            .collect::<String>()
            .to_lowercase(),
    }
}

fn pick_destination(config: &GeneratorConfig, home: usize, rng: &mut StdRng) -> usize {
    let n = config.num_courts;
    if config.neighborhood > 0 && rng.gen_bool(config.locality) {
        let span = config.neighborhood.min(n / 2).max(1);
        let offset = rng.gen_range(1..=span);
        if rng.gen_bool(0.5) {
            (home + offset) % n
        } else {
            (home + n - offset) % n
        }
    } else {
        // Uniform over every court but `home`.
        let d = rng.gen_range(0..n - 1);
        if d >= home { d + 1 } else { d }
    }
}

/// Generates raw table rows from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. Every row has
/// a name, a court and at least one destination; destinations are distinct
/// and never the row's own court.
pub fn generate_records(config: &GeneratorConfig) -> Vec<ParticipantRecord> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let labels: Vec<String> = (0..config.num_courts.max(2)).map(court_label).collect();
    let n = labels.len();
    let config = GeneratorConfig {
        num_courts: n,
        ..config.clone()
    };

    let spell = |court: usize, rng: &mut StdRng| -> String {
        let label = &labels[court];
        if rng.gen_bool(config.spelling_noise) {
            variant(label, rng)
        } else {
            label.clone()
        }
    };

    (0..config.num_participants)
        .map(|i| {
            let home = rng.gen_range(0..n);
            let wanted = rng.gen_range(1..=MAX_DESTINATIONS);
            let mut destinations: Vec<usize> = Vec::with_capacity(wanted);
            for _ in 0..wanted {
                let d = pick_destination(&config, home, &mut rng);
                if d != home && !destinations.contains(&d) {
                    destinations.push(d);
                }
            }
            let spelled: Vec<String> = destinations
                .into_iter()
                .map(|d| spell(d, &mut rng))
                .collect();
            let mut dest = spelled.into_iter();
            let band = if rng.gen_bool(config.blank_band) {
                None
            } else {
                BANDS.choose(&mut rng).map(|b| (*b).to_owned())
            };
            ParticipantRecord {
                name: Some(format!("Participant {i:05}")),
                current_court: Some(spell(home, &mut rng)),
                destination_1: dest.next(),
                destination_2: dest.next(),
                destination_3: dest.next(),
                band,
            }
        })
        .collect()
}

/// Generates a participant snapshot from the given configuration.
pub fn generate_participants(config: &GeneratorConfig) -> Vec<Participant> {
    participants_from_records(&generate_records(config))
}
