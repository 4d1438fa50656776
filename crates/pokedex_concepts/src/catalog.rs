//! The canonical Pokémon type numbering.
//!
//! Both concepts refer to types by these numbers: the Type concept stores
//! them as record identifiers, species store them as foreign keys. Number 5
//! is unassigned.

use std::fmt;

use pokedex_foundation::RecordId;

/// A type with a fixed, well-known identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KnownType {
    /// Normal (1).
    Normal,
    /// Fire (2).
    Fire,
    /// Grass (3).
    Grass,
    /// Water (4).
    Water,
    /// Electric (6).
    Electric,
    /// Flying (7).
    Flying,
    /// Ghost (8).
    Ghost,
    /// Poison (9).
    Poison,
    /// Psychic (10).
    Psychic,
    /// Bug (11).
    Bug,
    /// Rock (12).
    Rock,
    /// Ground (13).
    Ground,
    /// Fighting (14).
    Fighting,
    /// Ice (15).
    Ice,
    /// Dragon (16).
    Dragon,
    /// Dark (17).
    Dark,
    /// Steel (18).
    Steel,
    /// Fairy (19).
    Fairy,
}

impl KnownType {
    /// Every known type in identifier order.
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Grass,
        Self::Water,
        Self::Electric,
        Self::Flying,
        Self::Ghost,
        Self::Poison,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ground,
        Self::Fighting,
        Self::Ice,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Returns the type's identifier.
    #[must_use]
    pub const fn id(self) -> RecordId {
        RecordId::new(match self {
            Self::Normal => 1,
            Self::Fire => 2,
            Self::Grass => 3,
            Self::Water => 4,
            Self::Electric => 6,
            Self::Flying => 7,
            Self::Ghost => 8,
            Self::Poison => 9,
            Self::Psychic => 10,
            Self::Bug => 11,
            Self::Rock => 12,
            Self::Ground => 13,
            Self::Fighting => 14,
            Self::Ice => 15,
            Self::Dragon => 16,
            Self::Dark => 17,
            Self::Steel => 18,
            Self::Fairy => 19,
        })
    }

    /// Returns the type's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Fire => "Fire",
            Self::Grass => "Grass",
            Self::Water => "Water",
            Self::Electric => "Electric",
            Self::Flying => "Flying",
            Self::Ghost => "Ghost",
            Self::Poison => "Poison",
            Self::Psychic => "Psychic",
            Self::Bug => "Bug",
            Self::Rock => "Rock",
            Self::Ground => "Ground",
            Self::Fighting => "Fighting",
            Self::Ice => "Ice",
            Self::Dragon => "Dragon",
            Self::Dark => "Dark",
            Self::Steel => "Steel",
            Self::Fairy => "Fairy",
        }
    }

    /// Looks up a type by identifier.
    #[must_use]
    pub fn from_id(id: RecordId) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Looks up a type by display name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl From<KnownType> for RecordId {
    fn from(known: KnownType) -> Self {
        known.id()
    }
}

impl fmt::Display for KnownType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
