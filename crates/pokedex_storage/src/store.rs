//! Record storage keyed by identifier.
//!
//! The `EntityStore` holds one concept's records and remembers the order in
//! which identifiers were first inserted. It performs no validation: the
//! owning service checks for existence before it writes.

use pokedex_foundation::RecordId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from identifier to record.
///
/// Clone is O(1) due to structural sharing, so a whole store can be
/// snapshotted cheaply.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityStore<R: Clone> {
    /// Records by identifier.
    records: im::OrdMap<RecordId, R>,
    /// Identifiers in first-insertion order.
    order: im::Vector<RecordId>,
}

impl<R: Clone> Default for EntityStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> EntityStore<R> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: im::OrdMap::new(),
            order: im::Vector::new(),
        }
    }

    /// Returns the record stored under `id`.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(&id)
    }

    /// Returns true if a record is stored under `id`.
    #[must_use]
    pub fn has(&self, id: RecordId) -> bool {
        self.records.contains_key(&id)
    }

    /// Stores `record` under `id`, replacing any previous record.
    ///
    /// Replacing keeps the identifier's original position in the listing order.
    pub fn set(&mut self, id: RecordId, record: R) {
        if self.records.insert(id, record).is_none() {
            self.order.push_back(id);
        }
    }

    /// Returns all records in first-insertion order.
    pub fn all_values(&self) -> impl Iterator<Item = &R> + '_ {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Returns all identifiers in first-insertion order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.order.iter().copied()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
