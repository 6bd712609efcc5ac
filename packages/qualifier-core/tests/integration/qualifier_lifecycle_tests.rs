//! Qualifier lifecycle tests
//!
//! Declaration → builder → immutable key → equivalence → context caches.

#[path = "../common/mod.rs"]
mod common;
use common::*;

use std::collections::HashMap;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use qualifier_core::{
    canonical_order, same, BugKind, HostValue, QualifierBuilder, QualifierConfig, QualifierContext,
    StructuralTreeSet, TreeQualifierSet, TypeRef,
};

// ═══════════════════════════════════════════════════════════════════════════
// End-to-end
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn range_scenario_end_to_end() {
    let registry = fixture_registry();

    let a = fixture_range(&registry, None, 10);
    let b = fixture_range(&registry, Some(0), 10);
    assert_same(&a, &b);

    let c = fixture_range(&registry, Some(1), 10);
    assert_not_same(&a, &c);

    let mut set = StructuralTreeSet::new();
    assert!(set.add(a.clone()).unwrap());
    assert!(set.add(c).unwrap());
    assert!(!set.add(b).unwrap());
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));

    // Type-name ordering collapses both ranges into one slot
    let mut canonical = TreeQualifierSet::new();
    canonical.add(a.clone()).unwrap();
    canonical.add(fixture_range(&registry, Some(1), 10)).unwrap();
    assert_eq!(canonical.len(), 1);
    assert!(!canonical.contains(&a));
}

#[test]
fn order_and_equivalence_diverge() {
    let registry = fixture_registry();
    let a = fixture_range(&registry, None, 1);
    let b = fixture_range(&registry, None, 2);
    assert_eq!(canonical_order(&a, &b), std::cmp::Ordering::Equal);
    assert!(!same(&a, &b));
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder contract
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn build_twice_fails_and_first_result_survives() {
    let registry = fixture_registry();
    let mut builder = QualifierBuilder::create(&registry, "q.Range").unwrap();
    builder.assign("to", 5).unwrap();

    let first = builder.build().unwrap();
    let err = builder.build().unwrap_err();
    assert!(err.is_bug());
    assert!(matches!(err.bug_kind(), Some(BugKind::AlreadyBuilt { .. })));
    assert_eq!(first.get_int("to").unwrap(), 5);
}

#[test]
fn type_mismatch_names_found_and_expected() {
    let registry = fixture_registry();
    let mut builder = QualifierBuilder::create(&registry, "q.Range").unwrap();

    let message = builder.assign("to", "ten").unwrap_err().to_string();
    assert!(message.contains("java.lang.String"), "{message}");
    assert!(message.contains("java.lang.Integer"), "{message}");

    assert!(builder.assign("to", 42).is_ok());
}

#[test]
fn missing_type_is_configuration_error() {
    let registry = fixture_registry();
    let err = QualifierBuilder::create(&registry, "q.Unknown").unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("q.Unknown"));
}

#[test]
fn default_values_are_transparent() {
    let registry = fixture_registry();
    let implicit = fixture_marker(&registry, "q.Unit");
    let explicit = QualifierBuilder::from_name(&registry, "q.Unit", [("value", "m")]).unwrap();
    let other = QualifierBuilder::from_name(&registry, "q.Unit", [("value", "s")]).unwrap();

    assert_same(&implicit, &explicit);
    assert_not_same(&implicit, &other);
    assert_eq!(implicit.get_string("value").unwrap(), "m");
}

#[test]
fn arrays_compare_positionally() {
    let registry = fixture_registry();
    let forward = fixture_sequence(&registry, &[1, 2, 3]);
    let again = fixture_sequence(&registry, &[1, 2, 3]);
    let backward = fixture_sequence(&registry, &[3, 2, 1]);

    assert_same(&forward, &again);
    assert_not_same(&forward, &backward);
    assert_eq!(forward.get_int_list("value").unwrap(), vec![1, 2, 3]);
}

#[test]
fn nested_and_reference_values() {
    let registry = fixture_registry();
    let policy = fixture_policy(&registry, "HIGH", &["io", "net"]);

    assert_eq!(policy.get_enum_constant("level").unwrap(), "HIGH");
    assert_eq!(policy.get_class_name("target").unwrap(), "java.lang.String");
    assert_eq!(policy.get_nested("inner").unwrap().get_int("to").unwrap(), 10);
    assert!(policy.value_contains("tags", "net").unwrap());
    assert!(!policy.value_contains("tags", "fs").unwrap());

    assert_same(&policy, &fixture_policy(&registry, "HIGH", &["io", "net"]));
    assert_not_same(&policy, &fixture_policy(&registry, "LOW", &["io", "net"]));
    assert_not_same(&policy, &fixture_policy(&registry, "HIGH", &["net", "io"]));
}

#[test]
fn empty_array_equals_empty_default() {
    let registry = fixture_registry();
    let explicit = fixture_policy(&registry, "HIGH", &[]);

    let inner = fixture_range(&registry, None, 10);
    let mut builder = QualifierBuilder::create(&registry, "q.Policy").unwrap();
    builder
        .assign("level", HostValue::enum_constant("q.Level", "HIGH"))
        .unwrap()
        .assign("target", TypeRef::string())
        .unwrap()
        .assign("inner", inner)
        .unwrap();
    let defaulted = builder.build().unwrap();

    assert_same(&explicit, &defaulted);
}

#[test]
fn rendering_follows_source_syntax() {
    let registry = fixture_registry();
    assert_eq!(fixture_marker(&registry, "q.NonNull").to_string(), "@q.NonNull");
    assert_eq!(fixture_range(&registry, Some(1), 2).to_string(), "@q.Range(from=1, to=2)");
    assert_eq!(fixture_sequence(&registry, &[7]).to_string(), "@q.Sequence(7)");
    assert_eq!(
        fixture_sequence(&registry, &[1, 2]).to_string(),
        "@q.Sequence({1, 2})"
    );
    assert_eq!(
        fixture_policy(&registry, "HIGH", &["io"]).to_string(),
        "@q.Policy(level=q.Level.HIGH, target=java.lang.String.class, inner=@q.Range(to=10), tags=\"io\")"
    );
}

#[test]
fn copy_and_rename_between_types() {
    let registry = fixture_registry();
    let source = fixture_range(&registry, Some(3), 9);

    let mut copy = QualifierBuilder::from_key(&registry, &source);
    copy.remove_element("from").unwrap();
    let without_from = copy.build().unwrap();
    assert_not_same(&source, &without_from);
    assert_same(&without_from, &fixture_range(&registry, None, 9));

    let mut renaming = HashMap::new();
    renaming.insert("to".to_string(), "value".to_string());
    let mut builder = QualifierBuilder::create(&registry, "q.Sequence").unwrap();
    // int is not int[], but copying does not re-validate values
    builder.copy_renaming(&source, &renaming).unwrap();
    assert_eq!(builder.build().unwrap().explicit_len(), 1);

    let mut builder = QualifierBuilder::create(&registry, "q.Unit").unwrap();
    assert!(builder.copy_from(&source, &["from"]).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn context_interns_markers_until_reset() {
    let ctx = QualifierContext::new(Arc::new(fixture_registry()));

    let first = ctx.marker_for("q.NonNull").unwrap();
    let second = ctx.marker_for("q.NonNull").unwrap();
    assert!(first.ptr_eq(&second));

    ctx.reset();
    let third = ctx.marker_for("q.NonNull").unwrap();
    assert!(!first.ptr_eq(&third));
    assert_same(&first, &third);
}

#[test]
fn context_marker_requires_defaults() {
    let ctx = QualifierContext::with_config(
        Arc::new(fixture_registry()),
        QualifierConfig::default(),
    )
    .unwrap();

    let err = ctx.marker_for("q.Range").unwrap_err();
    assert!(matches!(err.bug_kind(), Some(BugKind::MissingDefault { .. })));
    assert_eq!(ctx.marker_for("q.Unit").unwrap().get_string("value").unwrap(), "m");
}

#[test]
fn keys_are_shareable_across_threads() {
    let registry = fixture_registry();
    let key = fixture_policy(&registry, "HIGH", &["io"]);
    let expected = key.to_string();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = key.clone();
            std::thread::spawn(move || key.to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
