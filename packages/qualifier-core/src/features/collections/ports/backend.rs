use crate::errors::Result;
use crate::features::qualifier::domain::QualifierKey;

/// Borrowed entry of a backend
pub type Entry<'a, V> = (&'a QualifierKey, &'a V);

/// Storage strategy behind `QualifierMap` / `QualifierSet`
///
/// Lookups are by the backend's key order only. Confirming `same` is the
/// façade's job.
pub trait OrderedBackend<V>: Default + Clone {
    fn backend_name(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry whose key is order-equal to `key`
    fn find(&self, key: &QualifierKey) -> Option<Entry<'_, V>>;

    /// Insert, replacing both key and value of an order-equal entry
    fn insert(&mut self, key: QualifierKey, value: V) -> Option<(QualifierKey, V)>;

    fn remove(&mut self, key: &QualifierKey) -> Option<(QualifierKey, V)>;

    fn clear(&mut self);

    fn retain(&mut self, keep: &mut dyn FnMut(&QualifierKey, &V) -> bool);

    /// Entries in ascending key order
    fn iter(&self) -> Box<dyn Iterator<Item = Entry<'_, V>> + '_>;

    fn first(&self) -> Option<Entry<'_, V>>;

    fn last(&self) -> Option<Entry<'_, V>>;

    /// Greatest entry at or below `key`
    fn floor(&self, key: &QualifierKey) -> Option<Entry<'_, V>>;

    /// Least entry at or above `key`
    fn ceiling(&self, key: &QualifierKey) -> Option<Entry<'_, V>>;

    /// Entries from `lo` to `hi`, both inclusive
    fn range(&self, lo: &QualifierKey, hi: &QualifierKey) -> Result<Vec<Entry<'_, V>>>;

    /// Entries in descending key order
    fn descending(&self) -> Result<Vec<Entry<'_, V>>>;
}
