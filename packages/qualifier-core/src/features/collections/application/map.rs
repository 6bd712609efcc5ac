//! `same`-keyed map over a pluggable backend
//!
//! The backend locates candidates by its key order; every lookup is then
//! confirmed with `same`, so membership never depends on pointer identity.
//! `put` on an order-equal key replaces that entry's key and value.

use std::fmt;
use std::marker::PhantomData;

use tracing::debug;

use crate::errors::Result;
use crate::features::collections::domain::{KeyOrder, Mutability};
use crate::features::collections::infrastructure::{SortedArrayBackend, TreeBackend};
use crate::features::collections::ports::{Entry, OrderedBackend};
use crate::features::qualifier::domain::QualifierKey;
use crate::features::qualifier::infrastructure::equivalence::{contains_same, same};

pub struct QualifierMap<V, B = TreeBackend<V>> {
    backend: B,
    mutability: Mutability,
    _value: PhantomData<V>,
}

impl<V: Clone, B: OrderedBackend<V>> QualifierMap<V, B> {
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }

    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            mutability: Mutability::Mutable,
            _value: PhantomData,
        }
    }

    /// Mutable map holding `entries`; later order-equal keys replace earlier ones
    pub fn from_entries(entries: impl IntoIterator<Item = (QualifierKey, V)>) -> Self {
        let mut backend = B::default();
        for (key, value) in entries {
            backend.insert(key, value);
        }
        Self::with_backend(backend)
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.backend_name()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn mutability(&self) -> Mutability {
        self.mutability
    }

    pub fn is_unmodifiable(&self) -> bool {
        !self.mutability.is_mutable()
    }

    pub fn len(&self) -> usize {
        self.backend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// The stored entry `same` as `key`
    pub fn get_key_value(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.backend.find(key).filter(|(stored, _)| same(stored, key))
    }

    pub fn contains_key(&self, key: &QualifierKey) -> bool {
        self.get_key_value(key).is_some()
    }

    pub fn get(&self, key: &QualifierKey) -> Option<&V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Insert or replace; returns the value of the replaced order-equal entry
    pub fn put(&mut self, key: QualifierKey, value: V) -> Result<Option<V>> {
        self.mutability.check("put into")?;
        Ok(self.backend.insert(key, value).map(|(_, v)| v))
    }

    /// Remove the entry `same` as `key`
    pub fn remove(&mut self, key: &QualifierKey) -> Result<Option<V>> {
        self.mutability.check("remove from")?;
        if !self.contains_key(key) {
            return Ok(None);
        }
        Ok(self.backend.remove(key).map(|(_, v)| v))
    }

    pub fn clear(&mut self) -> Result<()> {
        self.mutability.check("clear")?;
        self.backend.clear();
        Ok(())
    }

    pub fn put_all(&mut self, entries: impl IntoIterator<Item = (QualifierKey, V)>) -> Result<()> {
        self.mutability.check("put into")?;
        for (key, value) in entries {
            self.put(key, value)?;
        }
        Ok(())
    }

    /// Remove every listed key; true if anything was removed
    pub fn remove_all<'k>(&mut self, keys: impl IntoIterator<Item = &'k QualifierKey>) -> Result<bool> {
        self.mutability.check("remove from")?;
        let mut changed = false;
        for key in keys {
            changed |= self.remove(key)?.is_some();
        }
        Ok(changed)
    }

    /// Keep only entries whose key is `same` as one of `keys`
    pub fn retain_all(&mut self, keys: &[QualifierKey]) -> Result<bool> {
        self.mutability.check("retain in")?;
        let before = self.backend.len();
        self.backend
            .retain(&mut |stored: &QualifierKey, _: &V| contains_same(keys, stored));
        Ok(self.backend.len() != before)
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_, V>> + '_ {
        self.backend.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &QualifierKey> + '_ {
        self.backend.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.backend.iter().map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<Entry<'_, V>> {
        self.backend.first()
    }

    pub fn last(&self) -> Option<Entry<'_, V>> {
        self.backend.last()
    }

    pub fn floor(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.backend.floor(key)
    }

    pub fn ceiling(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.backend.ceiling(key)
    }

    pub fn range(&self, lo: &QualifierKey, hi: &QualifierKey) -> Result<Vec<Entry<'_, V>>> {
        self.backend.range(lo, hi)
    }

    pub fn descending(&self) -> Result<Vec<Entry<'_, V>>> {
        self.backend.descending()
    }

    /// Move to the terminal unmodifiable state
    pub fn freeze(&mut self) {
        if self.mutability.is_mutable() {
            self.mutability = Mutability::Unmodifiable;
            debug!(
                backend = self.backend_name(),
                len = self.len(),
                "qualifier map frozen"
            );
        }
    }

    pub fn into_unmodifiable(mut self) -> Self {
        self.freeze();
        self
    }

    /// Unmodifiable snapshot; later changes to `self` are not visible in it
    pub fn unmodifiable(&self) -> Self {
        self.clone().into_unmodifiable()
    }
}

impl<V: Clone, O: KeyOrder> QualifierMap<V, SortedArrayBackend<V, O>> {
    /// Entry at `index` in ascending order
    pub fn get_index(&self, index: usize) -> Option<Entry<'_, V>> {
        self.backend.get_index(index)
    }

    /// Position of the entry `same` as `key`
    pub fn index_of(&self, key: &QualifierKey) -> Option<usize> {
        self.backend
            .index_of(key)
            .filter(|&i| matches!(self.backend.get_index(i), Some((stored, _)) if same(stored, key)))
    }
}

impl<V: Clone, B: OrderedBackend<V>> Default for QualifierMap<V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, B: Clone> Clone for QualifierMap<V, B> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            mutability: self.mutability,
            _value: PhantomData,
        }
    }
}

impl<V, B: fmt::Debug> fmt::Debug for QualifierMap<V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QualifierMap")
            .field("mutability", &self.mutability)
            .field("entries", &self.backend)
            .finish()
    }
}
