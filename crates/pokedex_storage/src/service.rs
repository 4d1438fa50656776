//! The generic concept service.
//!
//! A `ConceptService` owns one [`EntityStore`] and exposes the uniform action
//! surface: `view`, `create`, `update`. Every successful mutation calls the
//! injected [`SyncTrigger`] exactly once; reads never do.
//!
//! Records are handed out as owned clones. Their collections are persistent
//! values, so a caller can change its copy freely without touching the store.

use std::fmt;
use std::marker::PhantomData;

use pokedex_foundation::{Error, RecordId, Result, SyncTrigger};

use crate::concept::Concept;
use crate::config::{ConceptConfig, IdAllocation};
use crate::store::EntityStore;

/// Action surface for one concept.
///
/// Mutations take `&mut self`, so calls into one service are serialized by
/// the borrow checker. Hosts that share a service across threads must wrap it
/// in a lock.
pub struct ConceptService<C: Concept> {
    store: EntityStore<C::Record>,
    /// Next auto-assigned identifier; `None` once the counter has overflowed.
    next_id: Option<RecordId>,
    config: ConceptConfig,
    trigger: Box<dyn SyncTrigger>,
    _concept: PhantomData<C>,
}

impl<C: Concept> ConceptService<C> {
    /// Creates an empty service that reports changes to `trigger`.
    pub fn new(trigger: impl SyncTrigger + 'static) -> Self {
        Self::with_config(trigger, ConceptConfig::default())
    }

    /// Creates an empty service with an explicit configuration.
    pub fn with_config(trigger: impl SyncTrigger + 'static, config: ConceptConfig) -> Self {
        Self {
            store: EntityStore::new(),
            next_id: Some(RecordId::FIRST),
            config,
            trigger: Box::new(trigger),
            _concept: PhantomData,
        }
    }

    /// Returns the concept's name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        C::NAME
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ConceptConfig {
        &self.config
    }

    /// Returns a copy of the record stored under `id`.
    ///
    /// A missing record is a normal outcome and yields `None`.
    #[must_use]
    pub fn view(&self, id: RecordId) -> Option<C::Record> {
        tracing::debug!(concept = C::NAME, id = id.get(), "view requested");
        let record = self.store.get(id).cloned();
        if record.is_none() {
            tracing::warn!(concept = C::NAME, id = id.get(), "record not found");
        }
        record
    }

    /// Creates a record and returns a copy of it.
    ///
    /// With `id` set, that identifier must be unused. Without it, the next
    /// identifier is assigned according to [`ConceptConfig::id_allocation`].
    /// Fails with a duplicate identifier error when the identifier is taken,
    /// and with an invalid identifier error for zero. On failure the store is
    /// unchanged and the trigger is not called.
    pub fn create(&mut self, id: Option<RecordId>, draft: C::Draft) -> Result<C::Record> {
        let id = match id {
            Some(id) => id,
            None => self.allocate_id()?,
        };
        if !id.is_valid() {
            return Err(Error::invalid_identifier(C::NAME, id));
        }
        if self.store.has(id) {
            return Err(Error::duplicate_identifier(C::NAME, id));
        }

        let record = C::build(id, draft);
        debug_assert_eq!(C::id(&record), id);
        self.store.set(id, record.clone());
        tracing::info!(
            concept = C::NAME,
            id = id.get(),
            label = C::label(&record),
            "record created"
        );
        self.data_updated(id);
        Ok(record)
    }

    /// Applies `patch` to the record under `id` and returns a copy of the result.
    ///
    /// Returns `None` without notifying when no such record exists. An update
    /// always notifies, even if it changes nothing.
    pub fn update(&mut self, id: RecordId, patch: C::Patch) -> Option<C::Record> {
        let Some(existing) = self.store.get(id) else {
            tracing::warn!(concept = C::NAME, id = id.get(), "update target not found");
            return None;
        };

        let mut updated = existing.clone();
        C::apply(&mut updated, patch);
        debug_assert_eq!(C::id(&updated), id);
        self.store.set(id, updated.clone());
        tracing::info!(concept = C::NAME, id = id.get(), "record updated");
        self.data_updated(id);
        Some(updated)
    }

    /// Returns copies of all records in first-insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<C::Record> {
        self.store.all_values().cloned().collect()
    }

    /// Returns true if a record is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: RecordId) -> bool {
        self.store.has(id)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if the concept holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Output action: announces that record `id` was created or modified.
    fn data_updated(&self, id: RecordId) {
        tracing::debug!(concept = C::NAME, id = id.get(), "data updated");
        self.trigger.trigger(C::NAME, id);
    }

    fn allocate_id(&mut self) -> Result<RecordId> {
        let mut candidate = self
            .next_id
            .ok_or_else(|| Error::identifier_space_exhausted(C::NAME))?;

        if self.config.id_allocation == IdAllocation::SkipOccupied {
            while self.store.has(candidate) {
                candidate = candidate
                    .next()
                    .ok_or_else(|| Error::identifier_space_exhausted(C::NAME))?;
            }
        }

        self.next_id = candidate.next();
        Ok(candidate)
    }
}

impl<C: Concept> fmt::Debug for ConceptService<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConceptService")
            .field("concept", &C::NAME)
            .field("len", &self.store.len())
            .field("next_id", &self.next_id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
