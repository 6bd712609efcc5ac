//! Key orderings used by the container backends

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::features::qualifier::domain::QualifierKey;
use crate::features::qualifier::infrastructure::equivalence::{canonical_order, structural_order};

/// Total order a backend sorts its keys by
pub trait KeyOrder: 'static {
    const NAME: &'static str;

    fn compare(a: &QualifierKey, b: &QualifierKey) -> Ordering;
}

/// Type name only; same-type keys collide and replace each other
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalOrder;

impl KeyOrder for CanonicalOrder {
    const NAME: &'static str = "canonical";

    fn compare(a: &QualifierKey, b: &QualifierKey) -> Ordering {
        canonical_order(a, b)
    }
}

/// Type name, then effective element values; `Equal` exactly when `same`
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralOrder;

impl KeyOrder for StructuralOrder {
    const NAME: &'static str = "structural";

    fn compare(a: &QualifierKey, b: &QualifierKey) -> Ordering {
        structural_order(a, b)
    }
}

/// `QualifierKey` whose `Ord` is the strategy `O`
pub struct OrderedKey<O> {
    key: QualifierKey,
    _order: PhantomData<fn() -> O>,
}

impl<O: KeyOrder> OrderedKey<O> {
    pub fn new(key: QualifierKey) -> Self {
        Self {
            key,
            _order: PhantomData,
        }
    }

    pub fn key(&self) -> &QualifierKey {
        &self.key
    }

    pub fn into_key(self) -> QualifierKey {
        self.key
    }
}

impl<O> Clone for OrderedKey<O> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            _order: PhantomData,
        }
    }
}

impl<O> fmt::Debug for OrderedKey<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.key, f)
    }
}

impl<O: KeyOrder> PartialEq for OrderedKey<O> {
    fn eq(&self, other: &Self) -> bool {
        O::compare(&self.key, &other.key) == Ordering::Equal
    }
}

impl<O: KeyOrder> Eq for OrderedKey<O> {}

impl<O: KeyOrder> PartialOrd for OrderedKey<O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<O: KeyOrder> Ord for OrderedKey<O> {
    fn cmp(&self, other: &Self) -> Ordering {
        O::compare(&self.key, &other.key)
    }
}
