//! Per-concept definitions plugged into the generic service.

use std::fmt;

use pokedex_foundation::RecordId;

/// Describes one concept: its name, record shape, and how records are built
/// and patched.
///
/// Implementors are marker types; all state lives in
/// [`ConceptService`](crate::ConceptService).
pub trait Concept {
    /// Literal name passed to the sync trigger, e.g. `"Type"`.
    const NAME: &'static str;

    /// The stored record. Clones must not share mutable state.
    type Record: Clone + fmt::Debug;

    /// Every field of a record except its identifier.
    type Draft;

    /// A partial update: each present field overwrites the stored one.
    type Patch;

    /// Builds a new record from its identifier and fields.
    fn build(id: RecordId, draft: Self::Draft) -> Self::Record;

    /// Applies `patch` to `record`. Must leave the identifier untouched.
    fn apply(record: &mut Self::Record, patch: Self::Patch);

    /// Returns the record's identifier.
    fn id(record: &Self::Record) -> RecordId;

    /// Returns a human-readable label for diagnostics.
    fn label(record: &Self::Record) -> &str;
}
