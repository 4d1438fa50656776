//! Integration tests for persistent collections
//!
//! Tests that clones behave as independent values.

use pokedex_foundation::{PMap, PVec, RecordId};

// =============================================================================
// PVec
// =============================================================================

#[test]
fn vec_from_array_keeps_order() {
    let v = PVec::from([RecordId::new(3), RecordId::new(1), RecordId::new(2)]);
    let raw: Vec<u64> = v.iter().map(|id| id.get()).collect();
    assert_eq!(raw, vec![3, 1, 2]);
    assert_eq!(v.first(), Some(&RecordId::new(3)));
    assert_eq!(v.last(), Some(&RecordId::new(2)));
}

#[test]
fn vec_mutating_a_clone_leaves_original() {
    let original: PVec<u64> = (1..=5).collect();
    let mut copy = original.clone();
    copy.extend([6, 7]);
    copy.set(0, 100);

    assert_eq!(original.len(), 5);
    assert_eq!(original.get(0), Some(&1));
    assert_eq!(copy.len(), 7);
    assert_eq!(copy.get(0), Some(&100));
}

#[test]
fn vec_functional_push_leaves_original() {
    let v1 = PVec::from([1, 2]);
    let v2 = v1.push_back(3);
    assert_eq!(v1.len(), 2);
    assert_eq!(v2.len(), 3);
}

// =============================================================================
// PMap
// =============================================================================

#[test]
fn map_mutating_a_clone_leaves_original() {
    let original = PMap::from([(RecordId::new(8), 0.0)]);
    let mut copy = original.clone();
    copy.put(RecordId::new(8), 2.0);
    copy.put(RecordId::new(9), 2.0);

    assert_eq!(original.get(&RecordId::new(8)), Some(&0.0));
    assert!(!original.contains_key(&RecordId::new(9)));
    assert_eq!(copy.len(), 2);
}

#[test]
fn map_union_overlays_without_dropping() {
    let existing = PMap::from([(RecordId::new(8), 0.0)]);
    let overlay = PMap::from([(RecordId::new(9), 2.0)]);

    let merged = existing.union(&overlay);

    assert_eq!(
        merged,
        PMap::from([(RecordId::new(8), 0.0), (RecordId::new(9), 2.0)])
    );
}

#[test]
fn map_debug_is_ordered() {
    let m = PMap::from([(2, "b"), (1, "a")]);
    assert_eq!(format!("{m:?}"), r#"{1: "a", 2: "b"}"#);
}
