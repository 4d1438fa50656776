//! Integration tests for the Type concept

use pokedex_concepts::{KnownType, TypeConcept, TypeDraft, TypePatch, seed};
use pokedex_foundation::{NoopTrigger, PMap, RecordId};
use pokedex_storage::ConceptConfig;

#[test]
fn damage_relations_merge_on_update() {
    let mut types = TypeConcept::new(NoopTrigger);
    let normal = TypeDraft::new("Normal", "#A8A878").with_relation(RecordId::new(8), 0.0);
    types.create(Some(KnownType::Normal.id()), normal).unwrap();

    let updated = types
        .update(
            KnownType::Normal.id(),
            TypePatch::default().relation(RecordId::new(9), 2.0),
        )
        .unwrap();

    assert_eq!(
        updated.damage_relations,
        PMap::from([(RecordId::new(8), 0.0), (RecordId::new(9), 2.0)])
    );
}

#[test]
fn single_relation_patch_overrides_seeded_poison() {
    let mut types = seed::seeded_types(NoopTrigger, ConceptConfig::default()).unwrap();
    let before = types.view(KnownType::Poison.id()).unwrap();
    assert!((before.multiplier_against(KnownType::Grass) - 2.0).abs() < f64::EPSILON);

    let updated = types
        .update(
            KnownType::Poison.id(),
            TypePatch::default().relation(KnownType::Grass, 1.0),
        )
        .unwrap();

    assert!((updated.multiplier_against(KnownType::Grass) - 1.0).abs() < f64::EPSILON);
    assert_eq!(updated.damage_relations.len(), before.damage_relations.len());
    for (defender, multiplier) in before.damage_relations.iter() {
        if *defender != KnownType::Grass.id() {
            assert_eq!(updated.damage_relations.get(defender), Some(multiplier));
        }
    }
    assert_eq!(
        types.view(KnownType::Poison.id()).unwrap().damage_relations,
        updated.damage_relations
    );
}

#[test]
fn multipliers_are_not_range_checked() {
    let mut types = TypeConcept::new(NoopTrigger);
    let odd = TypeDraft::new("Odd", "#000000").with_relation(KnownType::Steel, 4.0);

    let created = types.create(None, odd).unwrap();

    assert!((created.multiplier_against(KnownType::Steel) - 4.0).abs() < f64::EPSILON);
}

#[test]
fn update_on_missing_type_returns_none() {
    let mut types = TypeConcept::new(NoopTrigger);
    assert_eq!(
        types.update(RecordId::new(999), TypePatch::default().name("Nope")),
        None
    );
    assert!(types.is_empty());
}
