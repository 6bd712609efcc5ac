//! Ordered-tree backend
//!
//! `BTreeMap` keyed by `OrderedKey<O>`. Point operations are O(log n);
//! navigation and range queries are supported.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use crate::errors::Result;
use crate::features::collections::domain::{CanonicalOrder, KeyOrder, OrderedKey};
use crate::features::collections::ports::{Entry, OrderedBackend};
use crate::features::qualifier::domain::QualifierKey;

pub struct TreeBackend<V, O: KeyOrder = CanonicalOrder> {
    entries: BTreeMap<OrderedKey<O>, V>,
}

impl<V, O: KeyOrder> TreeBackend<V, O> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    fn probe(key: &QualifierKey) -> OrderedKey<O> {
        OrderedKey::new(key.clone())
    }
}

impl<V, O: KeyOrder> Default for TreeBackend<V, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone, O: KeyOrder> Clone for TreeBackend<V, O> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: fmt::Debug, O: KeyOrder> fmt::Debug for TreeBackend<V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

fn entry<'a, O: KeyOrder, V>((k, v): (&'a OrderedKey<O>, &'a V)) -> Entry<'a, V> {
    (k.key(), v)
}

impl<V: Clone, O: KeyOrder> OrderedBackend<V> for TreeBackend<V, O> {
    fn backend_name(&self) -> &'static str {
        "tree"
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn find(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.entries.get_key_value(&Self::probe(key)).map(entry)
    }

    fn insert(&mut self, key: QualifierKey, value: V) -> Option<(QualifierKey, V)> {
        let probe = OrderedKey::new(key);
        // BTreeMap keeps the old key on insert; the new key must win
        let previous = self
            .entries
            .remove_entry(&probe)
            .map(|(k, v)| (k.into_key(), v));
        self.entries.insert(probe, value);
        previous
    }

    fn remove(&mut self, key: &QualifierKey) -> Option<(QualifierKey, V)> {
        self.entries
            .remove_entry(&Self::probe(key))
            .map(|(k, v)| (k.into_key(), v))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&QualifierKey, &V) -> bool) {
        self.entries.retain(|k, v| keep(k.key(), v));
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Entry<'_, V>> + '_> {
        Box::new(self.entries.iter().map(entry))
    }

    fn first(&self) -> Option<Entry<'_, V>> {
        self.entries.first_key_value().map(entry)
    }

    fn last(&self) -> Option<Entry<'_, V>> {
        self.entries.last_key_value().map(entry)
    }

    fn floor(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.entries
            .range((Bound::Unbounded, Bound::Included(Self::probe(key))))
            .next_back()
            .map(entry)
    }

    fn ceiling(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        self.entries
            .range((Bound::Included(Self::probe(key)), Bound::Unbounded))
            .next()
            .map(entry)
    }

    fn range(&self, lo: &QualifierKey, hi: &QualifierKey) -> Result<Vec<Entry<'_, V>>> {
        // BTreeMap::range panics on an inverted range
        if O::compare(lo, hi) == Ordering::Greater {
            return Ok(Vec::new());
        }
        Ok(self
            .entries
            .range(Self::probe(lo)..=Self::probe(hi))
            .map(entry)
            .collect())
    }

    fn descending(&self) -> Result<Vec<Entry<'_, V>>> {
        Ok(self.entries.iter().rev().map(entry).collect())
    }
}
