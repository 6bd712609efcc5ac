//! Custom assertions for test verification

use qualifier_core::{same, QualifierKey};

/// Assert that two keys are `same`, in both directions
pub fn assert_same(a: &QualifierKey, b: &QualifierKey) {
    assert!(same(a, b), "Expected {a} to be same as {b}");
    assert!(same(b, a), "`same` is not symmetric for {a} and {b}");
}

/// Assert that two keys are not `same`, in both directions
pub fn assert_not_same(a: &QualifierKey, b: &QualifierKey) {
    assert!(!same(a, b), "Expected {a} to differ from {b}");
    assert!(!same(b, a), "`same` is not symmetric for {a} and {b}");
}

/// Assert the type names of `keys`, in order
pub fn assert_type_names<'a>(keys: impl IntoIterator<Item = &'a QualifierKey>, expected: &[&str]) {
    let names: Vec<&str> = keys.into_iter().map(QualifierKey::type_name).collect();
    assert_eq!(names, expected, "Unexpected iteration order");
}
