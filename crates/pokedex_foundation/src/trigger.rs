//! The synchronization trigger contract.
//!
//! A concept announces every successful mutation by calling its trigger with
//! its own name and the affected identifier. What happens next belongs to the
//! coordinator that supplied the trigger.

use crate::id::RecordId;

/// Receiver of `data_updated` notifications.
///
/// Called synchronously, exactly once per successful `create` or `update`.
/// The concept neither inspects the outcome nor catches a panic raised here.
pub trait SyncTrigger {
    /// Handles a change to record `id` of the concept named `concept`.
    fn trigger(&self, concept: &str, id: RecordId);
}

impl<F> SyncTrigger for F
where
    F: Fn(&str, RecordId),
{
    fn trigger(&self, concept: &str, id: RecordId) {
        self(concept, id);
    }
}

/// Trigger that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrigger;

impl SyncTrigger for NoopTrigger {
    fn trigger(&self, _concept: &str, _id: RecordId) {}
}
