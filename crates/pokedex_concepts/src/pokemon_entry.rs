//! The PokemonEntry concept: static data about each species.
//!
//! Records are keyed by national Pokedex number. Type, move, and game
//! references are foreign keys into other concepts and are not checked here.

use pokedex_foundation::{PVec, RecordId};
use pokedex_storage::{Concept, ConceptService};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The species registry.
pub type PokemonEntryConcept = ConceptService<PokemonEntries>;

/// Static data for one species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PokemonEntry {
    /// National Pokedex number.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Pokedex description text.
    pub description: String,
    /// Types, in display order.
    pub type_ids: PVec<RecordId>,
    /// Learnable moves, in display order.
    pub moveset_ids: PVec<RecordId>,
    /// Game the species first appeared in.
    pub origin_game_id: RecordId,
}

impl PokemonEntry {
    /// Returns true if the species has the given type.
    #[must_use]
    pub fn has_type(&self, type_id: impl Into<RecordId>) -> bool {
        self.type_ids.contains(&type_id.into())
    }
}

/// Fields for a new species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PokemonEntryDraft {
    /// Display name.
    pub name: String,
    /// Pokedex description text.
    pub description: String,
    /// Types, in display order.
    pub type_ids: PVec<RecordId>,
    /// Learnable moves, in display order.
    pub moveset_ids: PVec<RecordId>,
    /// Game the species first appeared in.
    pub origin_game_id: RecordId,
}

impl PokemonEntryDraft {
    /// Creates a draft with no types or moves.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        origin_game_id: RecordId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            type_ids: PVec::new(),
            moveset_ids: PVec::new(),
            origin_game_id,
        }
    }

    /// Builder method to set the types.
    #[must_use]
    pub fn with_types(mut self, type_ids: impl IntoIterator<Item = impl Into<RecordId>>) -> Self {
        self.type_ids = type_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the moveset.
    #[must_use]
    pub fn with_moves(
        mut self,
        moveset_ids: impl IntoIterator<Item = impl Into<RecordId>>,
    ) -> Self {
        self.moveset_ids = moveset_ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Partial update for a species. The identifier cannot be patched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PokemonEntryPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description text.
    pub description: Option<String>,
    /// Replacement type list.
    pub type_ids: Option<PVec<RecordId>>,
    /// Replacement moveset.
    pub moveset_ids: Option<PVec<RecordId>>,
    /// New origin game.
    pub origin_game_id: Option<RecordId>,
}

impl PokemonEntryPatch {
    /// Builder method to set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to replace the type list.
    #[must_use]
    pub fn type_ids(mut self, type_ids: impl IntoIterator<Item = impl Into<RecordId>>) -> Self {
        self.type_ids = Some(type_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to replace the moveset.
    #[must_use]
    pub fn moveset_ids(
        mut self,
        moveset_ids: impl IntoIterator<Item = impl Into<RecordId>>,
    ) -> Self {
        self.moveset_ids = Some(moveset_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method to set the origin game.
    #[must_use]
    pub fn origin_game_id(mut self, origin_game_id: RecordId) -> Self {
        self.origin_game_id = Some(origin_game_id);
        self
    }
}

/// Marker for the PokemonEntry concept.
#[derive(Debug)]
pub struct PokemonEntries;

impl Concept for PokemonEntries {
    const NAME: &'static str = "PokemonEntry";
    type Record = PokemonEntry;
    type Draft = PokemonEntryDraft;
    type Patch = PokemonEntryPatch;

    fn build(id: RecordId, draft: PokemonEntryDraft) -> PokemonEntry {
        PokemonEntry {
            id,
            name: draft.name,
            description: draft.description,
            type_ids: draft.type_ids,
            moveset_ids: draft.moveset_ids,
            origin_game_id: draft.origin_game_id,
        }
    }

    fn apply(record: &mut PokemonEntry, patch: PokemonEntryPatch) {
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(type_ids) = patch.type_ids {
            record.type_ids = type_ids;
        }
        if let Some(moveset_ids) = patch.moveset_ids {
            record.moveset_ids = moveset_ids;
        }
        if let Some(origin_game_id) = patch.origin_game_id {
            record.origin_game_id = origin_game_id;
        }
    }

    fn id(record: &PokemonEntry) -> RecordId {
        record.id
    }

    fn label(record: &PokemonEntry) -> &str {
        &record.name
    }
}
