//! Demo records for both concepts.
//!
//! Seeding goes through the regular `create` action, so every seeded record
//! fires the concept's trigger like any other creation.

use pokedex_foundation::{RecordId, Result, SyncTrigger};
use pokedex_storage::ConceptConfig;

use crate::catalog::KnownType;
use crate::pokemon_entry::{PokemonEntryConcept, PokemonEntryDraft};
use crate::pokemon_type::{TypeConcept, TypeDraft};

/// Pokémon Red.
pub const GAME_RED: RecordId = RecordId::new(1001);
/// Pokémon Sword.
pub const GAME_SWORD: RecordId = RecordId::new(1004);

/// Thunderbolt.
pub const MOVE_THUNDERBOLT: RecordId = RecordId::new(101);
/// Quick Attack.
pub const MOVE_QUICK_ATTACK: RecordId = RecordId::new(102);
/// Tackle.
pub const MOVE_TACKLE: RecordId = RecordId::new(103);
/// Growl.
pub const MOVE_GROWL: RecordId = RecordId::new(104);
/// Flamethrower.
pub const MOVE_FLAMETHROWER: RecordId = RecordId::new(105);
/// Vine Whip.
pub const MOVE_VINE_WHIP: RecordId = RecordId::new(106);

/// Demo species as `(national number, draft)` pairs.
#[must_use]
pub fn species() -> Vec<(RecordId, PokemonEntryDraft)> {
    vec![
        (
            RecordId::new(25),
            PokemonEntryDraft::new(
                "Pikachu",
                "It stores electricity in its cheeks. When it's angry, it discharges electricity from the sacs.",
                GAME_RED,
            )
            .with_types([KnownType::Electric])
            .with_moves([MOVE_THUNDERBOLT, MOVE_QUICK_ATTACK, MOVE_TACKLE, MOVE_GROWL]),
        ),
        (
            RecordId::new(6),
            PokemonEntryDraft::new(
                "Charizard",
                "It spits fire that is hot enough to melt boulders. It may cause forest fires if it's not careful.",
                GAME_RED,
            )
            .with_types([KnownType::Fire, KnownType::Flying])
            .with_moves([MOVE_FLAMETHROWER, MOVE_QUICK_ATTACK, MOVE_TACKLE, MOVE_GROWL]),
        ),
        (
            RecordId::new(1),
            PokemonEntryDraft::new(
                "Bulbasaur",
                "A strange seed was planted on its back at birth. The plant sprouts and grows larger as it grows.",
                GAME_RED,
            )
            .with_types([KnownType::Grass, KnownType::Poison])
            .with_moves([MOVE_VINE_WHIP, MOVE_TACKLE, MOVE_GROWL]),
        ),
        (
            RecordId::new(493),
            PokemonEntryDraft::new(
                "Arceus",
                "It is said to have emerged from an egg in a vortex of nothingness, then shaped the world with its 1,000 arms.",
                GAME_SWORD,
            )
            .with_types([KnownType::Normal])
            .with_moves([MOVE_QUICK_ATTACK, MOVE_TACKLE, MOVE_GROWL]),
        ),
    ]
}

/// Demo types as `(type, draft)` pairs.
///
/// Relations are a partial chart: only the matchups listed here are stored.
#[must_use]
pub fn types() -> Vec<(KnownType, TypeDraft)> {
    use KnownType::{
        Electric, Fighting, Fire, Flying, Ghost, Grass, Ground, Normal, Poison, Rock, Water,
    };

    let draft = |known: KnownType, color: &str| TypeDraft::new(known.name(), color);

    vec![
        (Normal, draft(Normal, "#A8A878").with_relation(Ghost, 0.0)),
        (
            Fire,
            draft(Fire, "#F08030")
                .with_relation(Grass, 2.0)
                .with_relation(Water, 0.5),
        ),
        (
            Grass,
            draft(Grass, "#78C850")
                .with_relation(Fire, 0.5)
                .with_relation(Water, 2.0),
        ),
        (
            Water,
            draft(Water, "#6890F0")
                .with_relation(Fire, 2.0)
                .with_relation(Grass, 0.5),
        ),
        (Electric, draft(Electric, "#F8D030").with_relation(Water, 2.0)),
        (
            Flying,
            draft(Flying, "#A890F0")
                .with_relation(Grass, 2.0)
                .with_relation(Electric, 0.5)
                .with_relation(Rock, 0.5)
                .with_relation(Fighting, 2.0),
        ),
        (Ghost, draft(Ghost, "#705898").with_relation(Normal, 0.0)),
        (
            Poison,
            draft(Poison, "#A040A0")
                .with_relation(Grass, 2.0)
                .with_relation(Poison, 0.5)
                .with_relation(Ground, 0.5)
                .with_relation(Rock, 0.5)
                .with_relation(Ghost, 0.5),
        ),
    ]
}

/// Creates every demo species in `entries`.
///
/// Fails on the first identifier that is already taken.
pub fn populate_species(entries: &mut PokemonEntryConcept) -> Result<()> {
    for (id, draft) in species() {
        entries.create(Some(id), draft)?;
    }
    tracing::info!(concept = entries.name(), count = entries.len(), "seeded");
    Ok(())
}

/// Creates every demo type in `types`.
///
/// Fails on the first identifier that is already taken.
pub fn populate_types(types: &mut TypeConcept) -> Result<()> {
    for (known, draft) in self::types() {
        types.create(Some(known.id()), draft)?;
    }
    tracing::info!(concept = types.name(), count = types.len(), "seeded");
    Ok(())
}

/// Builds a species registry holding the demo species.
pub fn seeded_species(
    trigger: impl SyncTrigger + 'static,
    config: ConceptConfig,
) -> Result<PokemonEntryConcept> {
    let mut entries = PokemonEntryConcept::with_config(trigger, config);
    populate_species(&mut entries)?;
    Ok(entries)
}

/// Builds a type registry holding the demo types.
pub fn seeded_types(
    trigger: impl SyncTrigger + 'static,
    config: ConceptConfig,
) -> Result<TypeConcept> {
    let mut types = TypeConcept::with_config(trigger, config);
    populate_types(&mut types)?;
    Ok(types)
}
