//! The PokemonEntry and Type concepts.
//!
//! This crate provides:
//! - [`PokemonEntryConcept`] - Species registry keyed by national Pokedex number
//! - [`TypeConcept`] - Type registry with damage relations
//! - [`KnownType`] - The canonical type numbering shared by both concepts
//! - [`seed`] - Demo records for both concepts

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod pokemon_entry;
pub mod pokemon_type;
pub mod seed;

pub use catalog::KnownType;
pub use pokemon_entry::{
    PokemonEntries, PokemonEntry, PokemonEntryConcept, PokemonEntryDraft, PokemonEntryPatch,
};
pub use pokemon_type::{TypeConcept, TypeDraft, TypePatch, TypeRecord, Types};
