//! The Type concept: names, colors, and damage relations.
//!
//! Damage relations map a defending type to the multiplier this type deals
//! against it. Updates merge relations instead of replacing them, so a patch
//! only needs to mention the matchups it changes.

use pokedex_foundation::{PMap, RecordId};
use pokedex_storage::{Concept, ConceptService};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The type registry.
pub type TypeConcept = ConceptService<Types>;

/// Multiplier used when no relation is recorded.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// One Pokémon type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeRecord {
    /// Type identifier.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Hex color for presentation, e.g. `#F08030`.
    pub color_hex: String,
    /// Damage multiplier against each defending type.
    pub damage_relations: PMap<RecordId, f64>,
}

impl TypeRecord {
    /// Returns the multiplier this type deals against `defender`.
    ///
    /// Matchups without a recorded relation are neutral.
    #[must_use]
    pub fn multiplier_against(&self, defender: impl Into<RecordId>) -> f64 {
        self.damage_relations
            .get(&defender.into())
            .copied()
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }
}

/// Fields for a new type.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDraft {
    /// Display name.
    pub name: String,
    /// Hex color for presentation.
    pub color_hex: String,
    /// Initial damage relations.
    pub damage_relations: PMap<RecordId, f64>,
}

impl TypeDraft {
    /// Creates a draft with no damage relations.
    #[must_use]
    pub fn new(name: impl Into<String>, color_hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_hex: color_hex.into(),
            damage_relations: PMap::new(),
        }
    }

    /// Builder method to add one damage relation.
    #[must_use]
    pub fn with_relation(mut self, defender: impl Into<RecordId>, multiplier: f64) -> Self {
        self.damage_relations.put(defender.into(), multiplier);
        self
    }
}

/// Partial update for a type. The identifier cannot be patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypePatch {
    /// New display name.
    pub name: Option<String>,
    /// New presentation color.
    pub color_hex: Option<String>,
    /// Relations to merge over the stored ones.
    pub damage_relations: Option<PMap<RecordId, f64>>,
}

impl TypePatch {
    /// Builder method to set the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the color.
    #[must_use]
    pub fn color_hex(mut self, color_hex: impl Into<String>) -> Self {
        self.color_hex = Some(color_hex.into());
        self
    }

    /// Builder method to merge one damage relation.
    #[must_use]
    pub fn relation(mut self, defender: impl Into<RecordId>, multiplier: f64) -> Self {
        self.damage_relations
            .get_or_insert_with(PMap::new)
            .put(defender.into(), multiplier);
        self
    }
}

/// Marker for the Type concept.
#[derive(Debug)]
pub struct Types;

impl Concept for Types {
    const NAME: &'static str = "Type";
    type Record = TypeRecord;
    type Draft = TypeDraft;
    type Patch = TypePatch;

    fn build(id: RecordId, draft: TypeDraft) -> TypeRecord {
        TypeRecord {
            id,
            name: draft.name,
            color_hex: draft.color_hex,
            damage_relations: draft.damage_relations,
        }
    }

    fn apply(record: &mut TypeRecord, patch: TypePatch) {
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(color_hex) = patch.color_hex {
            record.color_hex = color_hex;
        }
        if let Some(relations) = patch.damage_relations {
            record.damage_relations = record.damage_relations.union(&relations);
        }
    }

    fn id(record: &TypeRecord) -> RecordId {
        record.id
    }

    fn label(record: &TypeRecord) -> &str {
        &record.name
    }
}
