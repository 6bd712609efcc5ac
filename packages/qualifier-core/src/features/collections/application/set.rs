//! `same`-keyed set, a `QualifierMap` with unit values

use std::fmt;

use crate::errors::Result;
use crate::features::collections::domain::{KeyOrder, Mutability};
use crate::features::collections::infrastructure::{SortedArrayBackend, TreeBackend};
use crate::features::collections::ports::OrderedBackend;
use crate::features::qualifier::domain::QualifierKey;

use super::map::QualifierMap;

pub struct QualifierSet<B = TreeBackend<()>> {
    map: QualifierMap<(), B>,
}

impl<B: OrderedBackend<()>> QualifierSet<B> {
    pub fn new() -> Self {
        Self {
            map: QualifierMap::new(),
        }
    }

    pub fn with_backend(backend: B) -> Self {
        Self {
            map: QualifierMap::with_backend(backend),
        }
    }

    /// Mutable set of `keys`; later order-equal keys replace earlier ones
    pub fn from_keys(keys: impl IntoIterator<Item = QualifierKey>) -> Self {
        Self {
            map: QualifierMap::from_entries(keys.into_iter().map(|k| (k, ()))),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.map.backend_name()
    }

    pub fn mutability(&self) -> Mutability {
        self.map.mutability()
    }

    pub fn is_unmodifiable(&self) -> bool {
        self.map.is_unmodifiable()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, key: &QualifierKey) -> bool {
        self.map.contains_key(key)
    }

    /// The stored member `same` as `key`
    pub fn get(&self, key: &QualifierKey) -> Option<&QualifierKey> {
        self.map.get_key_value(key).map(|(k, _)| k)
    }

    /// Add `key` unless a `same` member exists; true if the set changed
    ///
    /// An order-equal member that is not `same` is replaced.
    pub fn add(&mut self, key: QualifierKey) -> Result<bool> {
        self.map.mutability().check("add to")?;
        if self.map.contains_key(&key) {
            return Ok(false);
        }
        self.map.put(key, ())?;
        Ok(true)
    }

    pub fn remove(&mut self, key: &QualifierKey) -> Result<bool> {
        Ok(self.map.remove(key)?.is_some())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.map.clear()
    }

    pub fn add_all(&mut self, keys: impl IntoIterator<Item = QualifierKey>) -> Result<bool> {
        self.map.mutability().check("add to")?;
        let mut changed = false;
        for key in keys {
            changed |= self.add(key)?;
        }
        Ok(changed)
    }

    pub fn remove_all<'k>(&mut self, keys: impl IntoIterator<Item = &'k QualifierKey>) -> Result<bool> {
        self.map.remove_all(keys)
    }

    pub fn retain_all(&mut self, keys: &[QualifierKey]) -> Result<bool> {
        self.map.retain_all(keys)
    }

    /// Members in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = &QualifierKey> + '_ {
        self.map.keys()
    }

    pub fn to_vec(&self) -> Vec<QualifierKey> {
        self.iter().cloned().collect()
    }

    pub fn first(&self) -> Option<&QualifierKey> {
        self.map.first().map(|(k, _)| k)
    }

    pub fn last(&self) -> Option<&QualifierKey> {
        self.map.last().map(|(k, _)| k)
    }

    pub fn floor(&self, key: &QualifierKey) -> Option<&QualifierKey> {
        self.map.floor(key).map(|(k, _)| k)
    }

    pub fn ceiling(&self, key: &QualifierKey) -> Option<&QualifierKey> {
        self.map.ceiling(key).map(|(k, _)| k)
    }

    pub fn range(&self, lo: &QualifierKey, hi: &QualifierKey) -> Result<Vec<&QualifierKey>> {
        Ok(self.map.range(lo, hi)?.into_iter().map(|(k, _)| k).collect())
    }

    pub fn descending(&self) -> Result<Vec<&QualifierKey>> {
        Ok(self.map.descending()?.into_iter().map(|(k, _)| k).collect())
    }

    pub fn freeze(&mut self) {
        self.map.freeze();
    }

    pub fn into_unmodifiable(mut self) -> Self {
        self.freeze();
        self
    }

    /// Unmodifiable snapshot; later changes to `self` are not visible in it
    pub fn unmodifiable(&self) -> Self {
        Self {
            map: self.map.unmodifiable(),
        }
    }
}

impl<O: KeyOrder> QualifierSet<SortedArrayBackend<(), O>> {
    pub fn get_index(&self, index: usize) -> Option<&QualifierKey> {
        self.map.get_index(index).map(|(k, _)| k)
    }

    pub fn index_of(&self, key: &QualifierKey) -> Option<usize> {
        self.map.index_of(key)
    }
}

impl<B: OrderedBackend<()>> Default for QualifierSet<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Clone> Clone for QualifierSet<B> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<B: OrderedBackend<()>> fmt::Debug for QualifierSet<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<B: OrderedBackend<()>> fmt::Display for QualifierSet<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "}}")
    }
}
