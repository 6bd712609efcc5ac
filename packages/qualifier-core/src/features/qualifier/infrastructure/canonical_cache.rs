//! Canonical caches
//!
//! - `CanonicalCache`: interned zero-element markers, one per type name
//! - `TypeNameCache`: bounded LRU from a type descriptor to its canonical name
//!
//! Both are owned by a `QualifierContext` and are safe to share between
//! threads. `clear()` must run between independent analysis runs; stale
//! markers from a previous run may point at an outdated declaration.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use lru::LruCache;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::errors::{BugKind, QualifierError, Result};
use crate::features::qualifier::domain::{QualifierDeclaration, QualifierKey};
use crate::features::qualifier::ports::TypeOracle;
use crate::shared::models::TypeRef;

/// Default capacity of the type-name cache
pub const TYPE_NAME_CACHE_CAPACITY: usize = 300;

/// Interned zero-element markers keyed by type name
#[derive(Default)]
pub struct CanonicalCache {
    markers: DashMap<String, QualifierKey>,
}

impl CanonicalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a zero-element key, without interning
    ///
    /// Every declared element needs a default for a zero-argument use.
    pub fn build_marker(declaration: Arc<QualifierDeclaration>) -> Result<QualifierKey> {
        if let Some(missing) = declaration.elements().iter().find(|e| e.default.is_none()) {
            return Err(QualifierError::bug(BugKind::MissingDefault {
                element: missing.name.clone(),
                type_name: declaration.type_name().to_string(),
            }));
        }
        Ok(QualifierKey::marker(declaration))
    }

    /// The interned marker for `type_name`, creating it on first use
    pub fn marker_for(&self, oracle: &dyn TypeOracle, type_name: &str) -> Result<QualifierKey> {
        if let Some(existing) = self.markers.get(type_name) {
            trace!(type_name, "marker cache hit");
            return Ok(existing.value().clone());
        }

        let declaration = oracle
            .declaration_of(type_name)
            .ok_or_else(|| QualifierError::configuration(type_name))?;
        let marker = Self::build_marker(declaration)?;

        // Concurrent creators race here; the first insert wins
        let interned = self
            .markers
            .entry(type_name.to_string())
            .or_insert(marker)
            .value()
            .clone();
        debug!(type_name, "interned qualifier marker");
        Ok(interned)
    }

    /// Cached marker, if any, without consulting the oracle
    pub fn get(&self, type_name: &str) -> Option<QualifierKey> {
        self.markers.get(type_name).map(|k| k.value().clone())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.markers.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&self) {
        let dropped = self.markers.len();
        self.markers.clear();
        debug!(dropped, "cleared marker cache");
    }
}

/// LRU cache from type descriptors to canonical names
pub struct TypeNameCache {
    cache: Mutex<LruCache<TypeRef, Arc<str>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TypeNameCache {
    /// Create a cache holding at most `capacity` names (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn with_default_size() -> Self {
        Self::new(TYPE_NAME_CACHE_CAPACITY)
    }

    /// Canonical name of `t`, computed at most once while it stays cached
    pub fn canonical_name(&self, t: &TypeRef) -> Arc<str> {
        let mut cache = self.cache.lock();
        if let Some(name) = cache.get(t) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(name);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let name: Arc<str> = Arc::from(t.canonical_name());
        if let Some((evicted, _)) = cache.push(t.clone(), Arc::clone(&name)) {
            if &evicted != t {
                trace!(evicted = %evicted, "type name cache eviction");
            }
        }
        name
    }

    pub fn contains(&self, t: &TypeRef) -> bool {
        self.cache.lock().contains(t)
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.lock().cap().get()
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("cleared type name cache");
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            capacity: self.capacity(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for TypeNameCache {
    fn default() -> Self {
        Self::with_default_size()
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub size: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate (0.0-1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
