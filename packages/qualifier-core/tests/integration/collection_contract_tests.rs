//! Collection contract tests
//!
//! Behaviour every `QualifierSet` / `QualifierMap` must show regardless of
//! backend: `same`-based membership, replace semantics, the unmodifiable
//! state and the array backend's unimplemented views.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use pretty_assertions::assert_eq;
use qualifier_core::{
    empty_map, empty_set, mutable_array_map, mutable_array_set, mutable_map, mutable_set,
    singleton, unmodifiable_map, unmodifiable_set, ArrayQualifierSet, BugKind, QualifierError,
    StructuralArraySet, StructuralTreeMap, StructuralTreeSet, TreeQualifierMap, TreeQualifierSet,
};

fn unmodifiable_kind(err: &QualifierError) -> Option<&'static str> {
    match err.bug_kind() {
        Some(BugKind::Unmodifiable { operation }) => Some(*operation),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Membership and replacement
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn membership_uses_same_not_identity() {
    let registry = fixture_registry();
    let mut set = mutable_set();
    set.add(fixture_range(&registry, None, 10)).unwrap();

    // Freshly built, explicitly defaulted: a different object but `same`
    let probe = fixture_range(&registry, Some(0), 10);
    assert!(set.contains(&probe));
    assert!(!set.add(probe.clone()).unwrap());
    assert_eq!(set.len(), 1);
    assert!(set.remove(&probe).unwrap());
    assert!(set.is_empty());
}

#[test]
fn canonical_map_put_replaces_order_equal_entry() {
    let registry = fixture_registry();
    let a = fixture_range(&registry, None, 1);
    let b = fixture_range(&registry, None, 2);

    let mut map = mutable_map();
    assert_eq!(map.put(a.clone(), "v1").unwrap(), None);
    assert_eq!(map.put(b.clone(), "v2").unwrap(), Some("v1"));

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&b), Some(&"v2"));
    assert_eq!(map.get(&a), None);
}

#[test]
fn remove_ignores_order_equal_but_different_key() {
    let registry = fixture_registry();
    let a = fixture_range(&registry, None, 1);
    let b = fixture_range(&registry, None, 2);

    let mut map = mutable_array_map();
    map.put(a.clone(), 1).unwrap();
    assert_eq!(map.remove(&b).unwrap(), None);
    assert_eq!(map.remove(&a).unwrap(), Some(1));
}

#[test]
fn structural_collections_keep_distinct_values() {
    let registry = fixture_registry();
    let keys: Vec<_> = (1..=5).map(|to| fixture_range(&registry, None, to)).collect();

    let mut tree = StructuralTreeSet::new();
    let mut array = StructuralArraySet::new();
    for key in keys.iter().rev() {
        tree.add(key.clone()).unwrap();
        array.add(key.clone()).unwrap();
    }
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.to_vec().len(), array.to_vec().len());
    for (t, a) in tree.iter().zip(array.iter()) {
        assert_same(t, a);
    }

    let mut map: StructuralTreeMap<i32> = StructuralTreeMap::new();
    for (i, key) in keys.iter().enumerate() {
        map.put(key.clone(), i as i32).unwrap();
    }
    assert_eq!(map.get(&fixture_range(&registry, Some(0), 3)), Some(&2));
}

#[test]
fn iteration_order_is_ascending_type_name() {
    let registry = fixture_registry();
    let set = TreeQualifierSet::from_keys([
        fixture_marker(&registry, "q.Unit"),
        fixture_marker(&registry, "q.NonNull"),
        fixture_range(&registry, None, 1),
        fixture_marker(&registry, "q.Nullable"),
    ]);
    assert_type_names(set.iter(), &["q.NonNull", "q.Nullable", "q.Range", "q.Unit"]);
    assert_eq!(set.first().unwrap().type_name(), "q.NonNull");
    assert_eq!(set.last().unwrap().type_name(), "q.Unit");

    let descending: Vec<_> = set.descending().unwrap().into_iter().cloned().collect();
    assert_type_names(&descending, &["q.Unit", "q.Range", "q.Nullable", "q.NonNull"]);

    let middle = set
        .range(&fixture_marker(&registry, "q.Nullable"), &fixture_range(&registry, None, 9))
        .unwrap();
    assert_type_names(middle, &["q.Nullable", "q.Range"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Backend agreement
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tree_and_array_backends_agree() {
    let registry = fixture_registry();
    let ops = [
        fixture_marker(&registry, "q.Unit"),
        fixture_range(&registry, None, 4),
        fixture_marker(&registry, "q.NonNull"),
        fixture_range(&registry, Some(2), 4),
        fixture_sequence(&registry, &[1, 2]),
        fixture_marker(&registry, "q.Unit"),
    ];

    let mut tree = TreeQualifierSet::new();
    let mut array = ArrayQualifierSet::new();
    for key in &ops {
        assert_eq!(tree.add(key.clone()).unwrap(), array.add(key.clone()).unwrap());
    }
    assert_eq!(tree.remove(&ops[2]).unwrap(), array.remove(&ops[2]).unwrap());

    assert_eq!(tree.to_string(), array.to_string());
    assert_eq!(tree.len(), array.len());
    let probe = fixture_sequence(&registry, &[9]);
    assert_eq!(
        tree.floor(&probe).map(|k| k.to_string()),
        array.floor(&probe).map(|k| k.to_string())
    );
}

#[test]
fn array_backend_positional_access() {
    let registry = fixture_registry();
    let mut set = mutable_array_set();
    set.add_all([
        fixture_marker(&registry, "q.Unit"),
        fixture_marker(&registry, "q.NonNull"),
    ])
    .unwrap();

    assert_eq!(set.get_index(0).unwrap().type_name(), "q.NonNull");
    assert_eq!(set.index_of(&fixture_marker(&registry, "q.Unit")), Some(1));
    assert!(set.get_index(2).is_none());
}

#[test]
fn array_backend_views_are_not_implemented() {
    let registry = fixture_registry();
    let mut set = mutable_array_set();
    set.add(fixture_marker(&registry, "q.NonNull")).unwrap();

    let err = set.descending().unwrap_err();
    assert!(err.is_not_implemented());
    let lo = fixture_marker(&registry, "q.NonNull");
    let hi = fixture_marker(&registry, "q.Unit");
    assert!(set.range(&lo, &hi).unwrap_err().is_not_implemented());

    // The set is still usable afterwards
    assert_eq!(set.len(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Unmodifiable state
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn unmodifiable_set_rejects_every_mutator() {
    let registry = fixture_registry();
    let key = fixture_marker(&registry, "q.NonNull");
    let mut set = TreeQualifierSet::from_keys([key.clone()]).into_unmodifiable();

    let errors = [
        set.add(fixture_marker(&registry, "q.Unit")).unwrap_err(),
        set.remove(&key).unwrap_err(),
        set.clear().unwrap_err(),
        set.add_all([fixture_marker(&registry, "q.Unit")]).unwrap_err(),
        set.remove_all([&key]).unwrap_err(),
        set.retain_all(&[]).unwrap_err(),
    ];
    for err in &errors {
        assert!(unmodifiable_kind(err).is_some(), "{err}");
    }
    assert_eq!(unmodifiable_kind(&errors[0]), Some("add to"));

    // Reads keep working and return the same answers
    for _ in 0..3 {
        assert_eq!(set.len(), 1);
        assert!(set.contains(&key));
        assert_eq!(set.to_string(), "{@q.NonNull}");
    }
}

#[test]
fn unmodifiable_map_rejects_every_mutator() {
    let registry = fixture_registry();
    let key = fixture_marker(&registry, "q.NonNull");
    let mut map: TreeQualifierMap<u8> = TreeQualifierMap::from_entries([(key.clone(), 1)]);
    map.freeze();
    map.freeze();

    assert_eq!(unmodifiable_kind(&map.put(key.clone(), 2).unwrap_err()), Some("put into"));
    assert_eq!(unmodifiable_kind(&map.remove(&key).unwrap_err()), Some("remove from"));
    assert!(map.clear().is_err());
    assert!(map.put_all([(key.clone(), 3)]).is_err());
    assert!(map.retain_all(&[]).is_err());
    assert_eq!(map.get(&key), Some(&1));
}

#[test]
fn snapshots_do_not_track_the_source() {
    let registry = fixture_registry();
    let mut set = mutable_set();
    set.add(fixture_marker(&registry, "q.NonNull")).unwrap();
    let snapshot = unmodifiable_set(&set);
    set.add(fixture_marker(&registry, "q.Unit")).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert!(!set.is_unmodifiable());

    let mut map = mutable_map();
    map.put(fixture_marker(&registry, "q.NonNull"), 'a').unwrap();
    let frozen = unmodifiable_map(&map);
    map.clear().unwrap();
    assert_eq!(frozen.len(), 1);
}

#[test]
fn canonical_factories() {
    let registry = fixture_registry();
    assert!(empty_set().is_empty());
    assert!(empty_set().is_unmodifiable());
    assert!(empty_map::<String>().is_unmodifiable());

    let key = fixture_marker(&registry, "q.Nullable");
    let mut one = singleton(key.clone());
    assert_eq!(one.to_vec(), vec![key.clone()]);
    assert!(one.add(fixture_marker(&registry, "q.Unit")).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// Bulk operations
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn bulk_operations_report_change() {
    let registry = fixture_registry();
    let non_null = fixture_marker(&registry, "q.NonNull");
    let nullable = fixture_marker(&registry, "q.Nullable");
    let unit = fixture_marker(&registry, "q.Unit");

    let mut set = mutable_set();
    assert!(set.add_all([non_null.clone(), nullable.clone()]).unwrap());
    assert!(!set.add_all([non_null.clone()]).unwrap());

    assert!(!set.remove_all([&unit]).unwrap());
    assert!(set.remove_all([&unit, &nullable]).unwrap());

    set.add(unit.clone()).unwrap();
    assert!(set.retain_all(&[unit.clone()]).unwrap());
    assert!(!set.retain_all(&[unit.clone()]).unwrap());
    assert_eq!(set.to_vec(), vec![unit]);
}

#[test]
fn retain_all_matches_by_same() {
    let registry = fixture_registry();
    let mut set = StructuralTreeSet::new();
    set.add_all([
        fixture_range(&registry, None, 1),
        fixture_range(&registry, None, 2),
    ])
    .unwrap();

    set.retain_all(&[fixture_range(&registry, Some(0), 2)]).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.first().unwrap().get_int("to").unwrap(), 2);
}
