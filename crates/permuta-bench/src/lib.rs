//! Participant snapshot generator and benchmark utilities for permuta.
//!
//! This crate provides deterministic generation of realistic participant
//! tables for benchmarking and property-style testing of `permuta-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_participants, generate_records};
