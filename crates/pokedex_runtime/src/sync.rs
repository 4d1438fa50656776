//! A synchronization engine for concept notifications.
//!
//! The engine is the coordinator side of the trigger contract. It records
//! every `(concept, id)` event in arrival order and passes each one to the
//! reactions registered for that concept. Concepts only see it through
//! [`SyncTrigger`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use pokedex_foundation::{RecordId, SyncTrigger};

/// One `data_updated` notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncEvent {
    /// Position in the engine's log, starting at 0.
    pub sequence: u64,
    /// Name of the concept that changed.
    pub concept: String,
    /// Identifier of the affected record.
    pub id: RecordId,
}

type Reaction = Rc<dyn Fn(&SyncEvent)>;

#[derive(Default)]
struct EngineState {
    events: Vec<SyncEvent>,
    reactions: HashMap<String, Vec<Reaction>>,
}

/// Records and dispatches concept notifications.
///
/// Cloning yields another handle to the same engine, so one engine can be
/// handed to several concepts.
#[derive(Clone, Default)]
pub struct SyncEngine {
    state: Rc<RefCell<EngineState>>,
}

impl SyncEngine {
    /// Creates an engine with no events and no reactions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a reaction to every event from the named concept.
    pub fn on(&self, concept: impl Into<String>, reaction: impl Fn(&SyncEvent) + 'static) {
        self.state
            .borrow_mut()
            .reactions
            .entry(concept.into())
            .or_default()
            .push(Rc::new(reaction));
    }

    /// Returns a copy of every recorded event in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<SyncEvent> {
        self.state.borrow().events.clone()
    }

    /// Returns the recorded events for one concept.
    #[must_use]
    pub fn events_for(&self, concept: &str) -> Vec<SyncEvent> {
        self.state
            .borrow()
            .events
            .iter()
            .filter(|event| event.concept == concept)
            .cloned()
            .collect()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().events.len()
    }

    /// Returns true if no event has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().events.is_empty()
    }

    /// Drops every recorded event. Reactions stay registered.
    pub fn clear(&self) {
        self.state.borrow_mut().events.clear();
    }
}

impl SyncTrigger for SyncEngine {
    fn trigger(&self, concept: &str, id: RecordId) {
        let (event, reactions) = {
            let mut state = self.state.borrow_mut();
            let event = SyncEvent {
                sequence: state.events.len() as u64,
                concept: concept.to_string(),
                id,
            };
            state.events.push(event.clone());
            let reactions = state.reactions.get(concept).cloned().unwrap_or_default();
            (event, reactions)
        };

        tracing::debug!(
            concept,
            id = id.get(),
            sequence = event.sequence,
            reactions = reactions.len(),
            "sync event"
        );

        // The state borrow is released so reactions may query the engine.
        for reaction in reactions {
            reaction(&event);
        }
    }
}

impl fmt::Debug for SyncEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SyncEngine")
            .field("events", &state.events.len())
            .field("concepts_with_reactions", &state.reactions.len())
            .finish()
    }
}
