//! Integration tests for the concept service
//!
//! Tests the view/create/update action surface and its notifications.

use pokedex_foundation::{ErrorKind, PVec, RecordId};
use pokedex_storage::{ConceptConfig, IdAllocation};

use crate::common::{MovePatch, moves};

// =============================================================================
// Create
// =============================================================================

#[test]
fn create_explicit_then_duplicate() {
    let (mut service, calls) = moves(ConceptConfig::default());
    let first = service.create(Some(RecordId::new(5)), "Pound".to_string()).unwrap();

    let err = service
        .create(Some(RecordId::new(5)), "Karate Chop".to_string())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::DuplicateIdentifier(RecordId::new(5)));
    assert_eq!(service.all(), vec![first]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn auto_increment_on_empty_store() {
    let (mut service, _) = moves(ConceptConfig::default());

    let a = service.create(None, "A".to_string()).unwrap();
    let b = service.create(None, "B".to_string()).unwrap();

    assert_eq!(a.id, RecordId::new(1));
    assert_eq!(b.id, RecordId::new(2));
}

#[test]
fn sequential_policy_reproduces_collision() {
    let (mut service, _) =
        moves(ConceptConfig::default().with_id_allocation(IdAllocation::Sequential));
    service.create(Some(RecordId::new(2)), "Seeded".to_string()).unwrap();

    assert_eq!(service.create(None, "A".to_string()).unwrap().id, RecordId::new(1));
    assert!(service.create(None, "B".to_string()).unwrap_err().is_duplicate());
    assert_eq!(service.create(None, "C".to_string()).unwrap().id, RecordId::new(3));
}

// =============================================================================
// View
// =============================================================================

#[test]
fn round_trip_view_equals_create() {
    let (mut service, _) = moves(ConceptConfig::default());
    let created = service.create(None, "X".to_string()).unwrap();

    assert_eq!(service.view(created.id), Some(created));
}

#[test]
fn view_is_isolated_from_caller_edits() {
    let (mut service, _) = moves(ConceptConfig::default());
    let created = service.create(None, "Surf".to_string()).unwrap();

    let mut copy = service.view(created.id).unwrap();
    copy.learned_by.push(RecordId::new(6));
    copy.power.put(2, 90.0);
    copy.name.clear();

    assert_eq!(service.view(created.id), Some(created));
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_on_missing_id_is_silent() {
    let (mut service, calls) = moves(ConceptConfig::default());

    assert_eq!(service.update(RecordId::new(999), MovePatch::default()), None);
    assert!(calls.borrow().is_empty());
}

#[test]
fn update_returns_isolated_copy() {
    let (mut service, calls) = moves(ConceptConfig::default());
    let created = service.create(Some(RecordId::new(57)), "Surf".to_string()).unwrap();

    let mut updated = service
        .update(
            created.id,
            MovePatch {
                learned_by: Some(PVec::from([RecordId::new(7), RecordId::new(8)])),
                ..MovePatch::default()
            },
        )
        .unwrap();
    updated.learned_by.clear();

    let stored = service.view(created.id).unwrap();
    assert_eq!(stored.learned_by.len(), 2);
    assert_eq!(stored.name, "Surf");
    assert_eq!(
        calls.borrow().as_slice(),
        &[
            ("Move".to_string(), RecordId::new(57)),
            ("Move".to_string(), RecordId::new(57)),
        ]
    );
}

#[test]
fn service_reports_its_name() {
    let (service, _) = moves(ConceptConfig::default());
    assert_eq!(service.name(), "Move");
    assert!(service.is_empty());
    assert!(!service.contains(RecordId::FIRST));
}
