//! Canonical container factories

use once_cell::sync::Lazy;

use crate::features::collections::ports::OrderedBackend;
use crate::features::qualifier::domain::QualifierKey;

use super::map::QualifierMap;
use super::set::QualifierSet;
use super::{ArrayQualifierMap, ArrayQualifierSet, TreeQualifierMap, TreeQualifierSet};

static EMPTY_SET: Lazy<TreeQualifierSet> = Lazy::new(|| TreeQualifierSet::new().into_unmodifiable());

/// The shared, unmodifiable empty set
pub fn empty_set() -> &'static TreeQualifierSet {
    &EMPTY_SET
}

/// An unmodifiable empty map
///
/// Unlike `empty_set` this is a fresh value per call: a `static` cannot be
/// generic over `V`. Construction is allocation-free, and every result is
/// equal and rejects mutation the same way.
pub fn empty_map<V: Clone>() -> TreeQualifierMap<V> {
    TreeQualifierMap::new().into_unmodifiable()
}

/// An unmodifiable set holding only `key`
pub fn singleton(key: QualifierKey) -> TreeQualifierSet {
    TreeQualifierSet::from_keys([key]).into_unmodifiable()
}

pub fn mutable_set() -> TreeQualifierSet {
    TreeQualifierSet::new()
}

pub fn mutable_map<V: Clone>() -> TreeQualifierMap<V> {
    TreeQualifierMap::new()
}

pub fn mutable_array_set() -> ArrayQualifierSet {
    ArrayQualifierSet::new()
}

pub fn mutable_array_map<V: Clone>() -> ArrayQualifierMap<V> {
    ArrayQualifierMap::new()
}

/// Unmodifiable snapshot of `set`, whatever its backend
pub fn unmodifiable_set<B: OrderedBackend<()>>(set: &QualifierSet<B>) -> QualifierSet<B> {
    set.unmodifiable()
}

/// Unmodifiable snapshot of `map`, whatever its backend
pub fn unmodifiable_map<V: Clone, B: OrderedBackend<V>>(map: &QualifierMap<V, B>) -> QualifierMap<V, B> {
    map.unmodifiable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::qualifier::domain::QualifierDeclaration;
    use crate::features::qualifier::infrastructure::{DeclarationRegistry, QualifierBuilder};

    fn marker(name: &str) -> QualifierKey {
        let registry = DeclarationRegistry::new().with(QualifierDeclaration::new(name));
        QualifierBuilder::create(&registry, name).unwrap().build().unwrap()
    }

    #[test]
    fn test_empty_set_is_shared_and_unmodifiable() {
        assert!(std::ptr::eq(empty_set(), empty_set()));
        assert!(empty_set().is_empty());
        assert!(empty_set().is_unmodifiable());
        assert!(empty_set().clone().add(marker("q.A")).is_err());
    }

    #[test]
    fn test_empty_map() {
        let mut map = empty_map::<u8>();
        assert!(map.is_empty());
        assert!(map.is_unmodifiable());
        assert!(map.put(marker("q.A"), 1).is_err());

        // per-call instances behave identically
        let other = empty_map::<u8>();
        assert!(other.is_unmodifiable());
        assert_eq!(format!("{other:?}"), format!("{map:?}"));
        assert_eq!(empty_map::<String>().len(), 0);
    }

    #[test]
    fn test_singleton() {
        let mut set = singleton(marker("q.A"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&marker("q.A")));
        assert!(set.remove(&marker("q.A")).is_err());
    }

    #[test]
    fn test_mutable_factories() {
        let mut set = mutable_array_set();
        assert!(set.add(marker("q.A")).unwrap());
        let frozen = unmodifiable_set(&set);
        assert!(set.add(marker("q.B")).unwrap());
        assert_eq!(frozen.len(), 1);
        assert_eq!(set.len(), 2);

        let mut map = mutable_map::<&str>();
        map.put(marker("q.A"), "a").unwrap();
        assert_eq!(unmodifiable_map(&map).get(&marker("q.A")), Some(&"a"));
        assert!(mutable_array_map::<u8>().is_empty());
        assert!(!mutable_set().is_unmodifiable());
    }
}
