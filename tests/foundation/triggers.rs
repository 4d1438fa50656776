//! Integration tests for the sync trigger contract

use std::cell::RefCell;

use pokedex_foundation::{NoopTrigger, RecordId, SyncTrigger};

struct Recorder {
    calls: RefCell<Vec<(String, RecordId)>>,
}

impl SyncTrigger for Recorder {
    fn trigger(&self, concept: &str, id: RecordId) {
        self.calls.borrow_mut().push((concept.to_string(), id));
    }
}

fn fire(trigger: &dyn SyncTrigger) {
    trigger.trigger("Type", RecordId::new(7));
}

#[test]
fn custom_trigger_receives_calls() {
    let recorder = Recorder {
        calls: RefCell::new(Vec::new()),
    };

    fire(&recorder);

    assert_eq!(
        recorder.calls.into_inner(),
        vec![("Type".to_string(), RecordId::new(7))]
    );
}

#[test]
fn noop_trigger_is_object_safe() {
    fire(&NoopTrigger);
}
