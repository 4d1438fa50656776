//! Pokedex - Concept registries with synchronization triggers
//!
//! This crate re-exports all layers of the Pokedex system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: pokedex_runtime    — Sync engine, configuration, logging, demo CLI
//! Layer 2: pokedex_concepts   — PokemonEntry and Type concepts, seed data
//! Layer 1: pokedex_storage    — Entity store, generic concept service
//! Layer 0: pokedex_foundation — RecordId, Error, persistent collections, SyncTrigger
//! ```

pub use pokedex_concepts as concepts;
pub use pokedex_foundation as foundation;
pub use pokedex_runtime as runtime;
pub use pokedex_storage as storage;
