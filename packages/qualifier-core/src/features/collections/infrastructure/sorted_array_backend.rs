//! Sorted-array backend
//!
//! One dense `Vec` kept sorted by `O`. Lookups binary-search in O(log n),
//! insert/remove splice in O(n), and any entry is reachable by position in
//! O(1). Sub-range and descending views are not implemented.

use std::fmt;
use std::marker::PhantomData;

use crate::errors::{QualifierError, Result};
use crate::features::collections::domain::{CanonicalOrder, KeyOrder};
use crate::features::collections::ports::{Entry, OrderedBackend};
use crate::features::qualifier::domain::QualifierKey;

const BACKEND_NAME: &str = "sorted_array";

pub struct SortedArrayBackend<V, O: KeyOrder = CanonicalOrder> {
    entries: Vec<(QualifierKey, V)>,
    _order: PhantomData<fn() -> O>,
}

impl<V, O: KeyOrder> SortedArrayBackend<V, O> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// `Ok(index)` of the order-equal entry, or `Err(insertion point)`
    fn search(&self, key: &QualifierKey) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|(k, _)| O::compare(k, key))
    }

    /// Entry at `index` in ascending order
    pub fn get_index(&self, index: usize) -> Option<Entry<'_, V>> {
        self.entries.get(index).map(|(k, v)| (k, v))
    }

    /// Position of the order-equal entry
    pub fn index_of(&self, key: &QualifierKey) -> Option<usize> {
        self.search(key).ok()
    }
}

impl<V, O: KeyOrder> Default for SortedArrayBackend<V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, O: KeyOrder> Clone for SortedArrayBackend<V, O> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _order: PhantomData,
        }
    }
}

impl<V: fmt::Debug, O: KeyOrder> fmt::Debug for SortedArrayBackend<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<V: Clone, O: KeyOrder> OrderedBackend<V> for SortedArrayBackend<V, O> {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn find(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.search(key).ok().and_then(|i| self.get_index(i))
    }

    fn insert(&mut self, key: QualifierKey, value: V) -> Option<(QualifierKey, V)> {
        match self.search(&key) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i], (key, value))),
            Err(i) => {
                self.entries.insert(i, (key, value));
                None
            }
        }
    }

    fn remove(&mut self, key: &QualifierKey) -> Option<(QualifierKey, V)> {
        self.search(key).ok().map(|i| self.entries.remove(i))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&QualifierKey, &V) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Entry<'_, V>> + '_> {
        Box::new(self.entries.iter().map(|(k, v)| (k, v)))
    }

    fn first(&self) -> Option<Entry<'_, V>> {
        self.get_index(0)
    }

    fn last(&self) -> Option<Entry<'_, V>> {
        self.entries.len().checked_sub(1).and_then(|i| self.get_index(i))
    }

    fn floor(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        let index = match self.search(key) {
            Ok(i) => i,
            Err(i) => i.checked_sub(1)?,
        };
        self.get_index(index)
    }

    fn ceiling(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        let index = match self.search(key) {
            Ok(i) | Err(i) => i,
        };
        self.get_index(index)
    }

    fn range(&self, _lo: &QualifierKey, _hi: &QualifierKey) -> Result<Vec<Entry<'_, V>>> {
        Err(QualifierError::not_implemented("range", BACKEND_NAME))
    }

    fn descending(&self) -> Result<Vec<Entry<'_, V>>> {
        Err(QualifierError::not_implemented("descending", BACKEND_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::qualifier::domain::QualifierDeclaration;
    use crate::features::qualifier::infrastructure::{DeclarationRegistry, QualifierBuilder};
    use crate::shared::models::TypeRef;

    fn registry() -> DeclarationRegistry {
        let mut registry = DeclarationRegistry::new();
        for name in ["q.A", "q.C", "q.E"] {
            registry.register(QualifierDeclaration::new(name));
        }
        registry.register(QualifierDeclaration::new("q.D").element("value", TypeRef::string()));
        registry
    }

    fn key(registry: &DeclarationRegistry, name: &str) -> QualifierKey {
        QualifierBuilder::create(registry, name).unwrap().build().unwrap()
    }

    fn d(registry: &DeclarationRegistry, value: &str) -> QualifierKey {
        QualifierBuilder::from_name(registry, "q.D", [("value", value)]).unwrap()
    }

    #[test]
    fn test_insert_keeps_sorted() {
        let registry = registry();
        let mut array: SortedArrayBackend<u32> = SortedArrayBackend::new();
        array.insert(key(&registry, "q.E"), 3);
        array.insert(key(&registry, "q.A"), 1);
        array.insert(key(&registry, "q.C"), 2);

        let names: Vec<_> = array.iter().map(|(k, _)| k.type_name()).collect();
        assert_eq!(names, vec!["q.A", "q.C", "q.E"]);
        assert_eq!(array.index_of(&key(&registry, "q.C")), Some(1));
        assert_eq!(array.get_index(2).map(|(_, v)| *v), Some(3));
        assert!(array.get_index(3).is_none());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let registry = registry();
        let mut array: SortedArrayBackend<u32> = SortedArrayBackend::new();
        array.insert(d(&registry, "x"), 1);
        let (old_key, old_value) = array.insert(d(&registry, "y"), 2).unwrap();
        assert_eq!(old_key.get_string("value").unwrap(), "x");
        assert_eq!(old_value, 1);
        assert_eq!(array.len(), 1);
        assert_eq!(array.first().unwrap().0.get_string("value").unwrap(), "y");
    }

    #[test]
    fn test_floor_and_ceiling() {
        let registry = registry();
        let mut array: SortedArrayBackend<()> = SortedArrayBackend::new();
        array.insert(key(&registry, "q.A"), ());
        array.insert(key(&registry, "q.E"), ());

        let probe = key(&registry, "q.C");
        assert_eq!(array.floor(&probe).unwrap().0.type_name(), "q.A");
        assert_eq!(array.ceiling(&probe).unwrap().0.type_name(), "q.E");
        assert!(array.floor(&d(&registry, "z")).is_some());
        assert!(array.ceiling(&key(&registry, "q.E")).is_some());

        array.remove(&key(&registry, "q.A"));
        assert!(array.floor(&probe).is_none());
        assert_eq!(array.last().unwrap().0.type_name(), "q.E");
    }

    #[test]
    fn test_views_not_implemented() {
        let registry = registry();
        let mut array: SortedArrayBackend<()> = SortedArrayBackend::new();
        array.insert(key(&registry, "q.A"), ());
        let a = key(&registry, "q.A");

        assert!(array.range(&a, &a).unwrap_err().is_not_implemented());
        assert!(array.descending().unwrap_err().is_not_implemented());
    }
}
