//! Configuration for concept services.

/// How a service picks an identifier when `create` is called without one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdAllocation {
    /// Advance the counter past identifiers that are already stored, so an
    /// auto-assigned identifier never collides with an explicit one.
    #[default]
    SkipOccupied,
    /// Hand out the raw counter value. A collision with an explicitly
    /// created record fails with a duplicate identifier error, and the
    /// counter stays advanced.
    Sequential,
}

/// Configuration for a [`ConceptService`](crate::ConceptService).
#[derive(Clone, Debug, Default)]
pub struct ConceptConfig {
    /// Identifier allocation policy for auto-assigned identifiers.
    pub id_allocation: IdAllocation,
}

impl ConceptConfig {
    /// Creates a configuration that reproduces the raw sequential counter.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            id_allocation: IdAllocation::Sequential,
        }
    }

    /// Builder method to set the identifier allocation policy.
    #[must_use]
    pub fn with_id_allocation(mut self, id_allocation: IdAllocation) -> Self {
        self.id_allocation = id_allocation;
        self
    }
}
