//! End-to-end notification tests
//!
//! Each successful mutation reaches the coordinator exactly once with the
//! right concept name and identifier; reads and failures never do.

use pokedex_concepts::{
    KnownType, PokemonEntryConcept, PokemonEntryDraft, PokemonEntryPatch, TypeConcept, TypeDraft,
    TypePatch,
};
use pokedex_foundation::RecordId;
use pokedex_runtime::SyncEngine;

fn event_pairs(engine: &SyncEngine) -> Vec<(String, u64)> {
    engine
        .events()
        .into_iter()
        .map(|e| (e.concept, e.id.get()))
        .collect()
}

#[test]
fn two_concepts_share_one_engine() {
    let engine = SyncEngine::new();
    let mut entries = PokemonEntryConcept::new(engine.clone());
    let mut types = TypeConcept::new(engine.clone());

    types
        .create(Some(KnownType::Fire.id()), TypeDraft::new("Fire", "#F08030"))
        .unwrap();
    entries
        .create(
            Some(RecordId::new(4)),
            PokemonEntryDraft::new("Charmander", "", RecordId::new(1001))
                .with_types([KnownType::Fire]),
        )
        .unwrap();
    types
        .update(KnownType::Fire.id(), TypePatch::default().relation(KnownType::Grass, 2.0))
        .unwrap();

    assert_eq!(
        event_pairs(&engine),
        vec![
            ("Type".to_string(), 2),
            ("PokemonEntry".to_string(), 4),
            ("Type".to_string(), 2),
        ]
    );
}

#[test]
fn reads_and_failures_stay_quiet() {
    let engine = SyncEngine::new();
    let mut entries = PokemonEntryConcept::new(engine.clone());
    entries
        .create(
            Some(RecordId::new(4)),
            PokemonEntryDraft::new("Charmander", "", RecordId::new(1001)),
        )
        .unwrap();
    engine.clear();

    let _ = entries.view(RecordId::new(4));
    let _ = entries.view(RecordId::new(5));
    let _ = entries.update(RecordId::new(5), PokemonEntryPatch::default().name("Charmeleon"));
    let _ = entries.create(
        Some(RecordId::new(4)),
        PokemonEntryDraft::new("Charmander again", "", RecordId::new(1001)),
    );

    assert!(engine.is_empty());
}

#[test]
fn identical_update_still_notifies() {
    let engine = SyncEngine::new();
    let mut types = TypeConcept::new(engine.clone());
    let created = types.create(None, TypeDraft::new("Ice", "#98D8D8")).unwrap();

    let updated = types
        .update(created.id, TypePatch::default().name("Ice"))
        .unwrap();

    assert_eq!(updated, created);
    assert_eq!(engine.events_for("Type").len(), 2);
}

#[test]
fn reaction_can_follow_up_on_another_concept_read() {
    let engine = SyncEngine::new();
    let mut types = TypeConcept::new(engine.clone());
    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = std::rc::Rc::clone(&seen);
    engine.on("Type", move |event| sink.borrow_mut().push(event.id));

    let created = types.create(None, TypeDraft::new("Bug", "#A8B820")).unwrap();

    assert_eq!(*seen.borrow(), vec![created.id]);
}
