//! Integration tests for the assembled Pokedex

use pokedex_concepts::{KnownType, PokemonEntryDraft};
use pokedex_foundation::RecordId;
use pokedex_runtime::{Pokedex, RuntimeConfig};
use pokedex_storage::ConceptConfig;

#[test]
fn seeded_pokedex_matches_demo_data() {
    let pokedex = Pokedex::new(&RuntimeConfig::default()).unwrap();

    assert_eq!(pokedex.entries().len(), 4);
    assert_eq!(pokedex.types().len(), 8);
    assert_eq!(pokedex.engine().len(), 12);
}

#[test]
fn electric_against_charizard_is_neutral_until_updated() {
    let pokedex = Pokedex::new(&RuntimeConfig::default()).unwrap();

    let multiplier = pokedex
        .effectiveness(KnownType::Electric.id(), RecordId::new(6))
        .unwrap();

    assert!((multiplier - 1.0).abs() < f64::EPSILON);
}

#[test]
fn auto_created_species_avoid_seeded_numbers() {
    let mut pokedex = Pokedex::new(&RuntimeConfig::default()).unwrap();

    let created = pokedex
        .entries_mut()
        .create(None, PokemonEntryDraft::new("Ivysaur", "", RecordId::new(1001)))
        .unwrap();

    assert_eq!(created.id, RecordId::new(2));
}

#[test]
fn sequential_ids_collide_with_seeded_bulbasaur() {
    let config = RuntimeConfig::default().with_concepts(ConceptConfig::sequential());
    let mut pokedex = Pokedex::new(&config).unwrap();
    let before = pokedex.engine().len();

    let err = pokedex
        .entries_mut()
        .create(None, PokemonEntryDraft::new("Ivysaur", "", RecordId::new(1001)))
        .unwrap_err();

    assert!(err.is_duplicate());
    assert_eq!(pokedex.engine().len(), before);
}
