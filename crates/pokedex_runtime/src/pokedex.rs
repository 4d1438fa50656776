//! Both concepts wired to one synchronization engine.

use std::collections::BTreeSet;

use pokedex_concepts::{PokemonEntryConcept, TypeConcept, seed};
use pokedex_foundation::RecordId;

use crate::config::RuntimeConfig;
use crate::error::Result;
use crate::sync::SyncEngine;

/// The species and type registries sharing one [`SyncEngine`].
///
/// The concepts never reference each other; cross-concept reads such as
/// [`Pokedex::effectiveness`] happen here, at the coordinator level.
#[derive(Debug)]
pub struct Pokedex {
    engine: SyncEngine,
    entries: PokemonEntryConcept,
    types: TypeConcept,
}

impl Pokedex {
    /// Builds both concepts, seeding them if the configuration asks for it.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let engine = SyncEngine::new();
        let mut entries =
            PokemonEntryConcept::with_config(engine.clone(), config.concepts.clone());
        let mut types = TypeConcept::with_config(engine.clone(), config.concepts.clone());

        if config.seed_demo_data {
            seed::populate_types(&mut types)?;
            seed::populate_species(&mut entries)?;
        }

        Ok(Self {
            engine,
            entries,
            types,
        })
    }

    /// Returns the engine receiving both concepts' notifications.
    #[must_use]
    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    /// Returns the species registry.
    #[must_use]
    pub fn entries(&self) -> &PokemonEntryConcept {
        &self.entries
    }

    /// Returns the species registry for mutation.
    pub fn entries_mut(&mut self) -> &mut PokemonEntryConcept {
        &mut self.entries
    }

    /// Returns the type registry.
    #[must_use]
    pub fn types(&self) -> &TypeConcept {
        &self.types
    }

    /// Returns the type registry for mutation.
    pub fn types_mut(&mut self) -> &mut TypeConcept {
        &mut self.types
    }

    /// Returns the damage multiplier of an attacking type against a species.
    ///
    /// Multiplies the attacker's relation to each distinct type of the
    /// defender; a type listed twice counts once. Missing relations are
    /// neutral. Returns `None` if either record is unknown.
    #[must_use]
    pub fn effectiveness(&self, attacking_type: RecordId, defender: RecordId) -> Option<f64> {
        let attacker = self.types.view(attacking_type)?;
        let species = self.entries.view(defender)?;

        let distinct: BTreeSet<RecordId> = species.type_ids.iter().copied().collect();
        Some(
            distinct
                .into_iter()
                .map(|type_id| attacker.multiplier_against(type_id))
                .product(),
        )
    }
}
