//! Backend chosen at runtime from `BackendKind`

use crate::config::BackendKind;
use crate::errors::Result;
use crate::features::collections::domain::{CanonicalOrder, KeyOrder};
use crate::features::collections::ports::{Entry, OrderedBackend};
use crate::features::qualifier::domain::QualifierKey;

use super::sorted_array_backend::SortedArrayBackend;
use super::tree_backend::TreeBackend;

#[derive(Debug)]
pub enum ConfiguredBackend<V, O: KeyOrder = CanonicalOrder> {
    Tree(TreeBackend<V, O>),
    SortedArray(SortedArrayBackend<V, O>),
}

impl<V, O: KeyOrder> ConfiguredBackend<V, O> {
    pub fn new(kind: BackendKind) -> Self {
        match kind {
            BackendKind::Tree => ConfiguredBackend::Tree(TreeBackend::new()),
            BackendKind::SortedArray => ConfiguredBackend::SortedArray(SortedArrayBackend::new()),
        }
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            ConfiguredBackend::Tree(_) => BackendKind::Tree,
            ConfiguredBackend::SortedArray(_) => BackendKind::SortedArray,
        }
    }
}

impl<V, O: KeyOrder> Default for ConfiguredBackend<V, O> {
    fn default() -> Self {
        Self::new(BackendKind::default())
    }
}

impl<V: Clone, O: KeyOrder> Clone for ConfiguredBackend<V, O> {
    fn clone(&self) -> Self {
        match self {
            ConfiguredBackend::Tree(b) => ConfiguredBackend::Tree(b.clone()),
            ConfiguredBackend::SortedArray(b) => ConfiguredBackend::SortedArray(b.clone()),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            ConfiguredBackend::Tree($backend) => $call,
            ConfiguredBackend::SortedArray($backend) => $call,
        }
    };
}

impl<V: Clone, O: KeyOrder> OrderedBackend<V> for ConfiguredBackend<V, O> {
    fn backend_name(&self) -> &'static str {
        dispatch!(self, b => b.backend_name())
    }

    fn len(&self) -> usize {
        dispatch!(self, b => b.len())
    }

    fn find(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        dispatch!(self, b => b.find(key))
    }

    fn insert(&mut self, key: QualifierKey, value: V) -> Option<(QualifierKey, V)> {
        dispatch!(self, b => b.insert(key, value))
    }

    fn remove(&mut self, key: &QualifierKey) -> Option<(QualifierKey, V)> {
        dispatch!(self, b => b.remove(key))
    }

    fn clear(&mut self) {
        dispatch!(self, b => b.clear())
    }

    fn retain(&mut self, keep: &mut dyn FnMut(&QualifierKey, &V) -> bool) {
        dispatch!(self, b => b.retain(keep))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Entry<'_, V>> + '_> {
        dispatch!(self, b => b.iter())
    }

    fn first(&self) -> Option<Entry<'_, V>> {
        dispatch!(self, b => b.first())
    }

    fn last(&self) -> Option<Entry<'_, V>> {
        dispatch!(self, b => b.last())
    }

    fn floor(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        dispatch!(self, b => b.floor(key))
    }

    fn ceiling(&self, key: &QualifierKey) -> Option<Entry<'_, V>> {
        dispatch!(self, b => b.ceiling(key))
    }

    fn range(&self, lo: &QualifierKey, hi: &QualifierKey) -> Result<Vec<Entry<'_, V>>> {
        dispatch!(self, b => b.range(lo, hi))
    }

    fn descending(&self) -> Result<Vec<Entry<'_, V>>> {
        dispatch!(self, b => b.descending())
    }
}
