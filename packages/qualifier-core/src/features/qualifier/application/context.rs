//! Per-run qualifier context
//!
//! Owns the type oracle and both caches for one analysis run. Independent
//! runs in one process each get their own context, or call `reset()` in
//! between.

use std::sync::Arc;

use tracing::debug;

use crate::config::{ConfigResult, QualifierConfig};
use crate::errors::{QualifierError, Result};
use crate::features::collections::{ConfiguredBackend, ConfiguredMap, ConfiguredSet};
use crate::features::qualifier::domain::{HostValue, QualifierKey};
use crate::features::qualifier::infrastructure::{
    CanonicalCache, CacheStats, QualifierBuilder, TypeNameCache,
};
use crate::features::qualifier::ports::TypeOracle;
use crate::shared::models::TypeRef;

pub struct QualifierContext {
    oracle: Arc<dyn TypeOracle>,
    markers: CanonicalCache,
    type_names: TypeNameCache,
    config: QualifierConfig,
}

impl QualifierContext {
    pub fn new(oracle: Arc<dyn TypeOracle>) -> Self {
        Self::from_parts(oracle, QualifierConfig::default())
    }

    /// Context with a validated configuration
    pub fn with_config(oracle: Arc<dyn TypeOracle>, config: QualifierConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(oracle, config))
    }

    fn from_parts(oracle: Arc<dyn TypeOracle>, config: QualifierConfig) -> Self {
        debug!(
            type_name_cache_capacity = config.type_name_cache_capacity,
            intern_markers = config.intern_markers,
            backend = config.default_backend.as_str(),
            "qualifier context created"
        );
        Self {
            oracle,
            markers: CanonicalCache::new(),
            type_names: TypeNameCache::new(config.type_name_cache_capacity),
            config,
        }
    }

    pub fn oracle(&self) -> &dyn TypeOracle {
        self.oracle.as_ref()
    }

    pub fn config(&self) -> &QualifierConfig {
        &self.config
    }

    /// Builder for `type_name` validated against this context's oracle
    ///
    /// Assignment checks resolve type names through the context's LRU.
    pub fn builder(&self, type_name: &str) -> Result<QualifierBuilder<'_>> {
        Ok(QualifierBuilder::create(self.oracle(), type_name)?.with_type_names(&self.type_names))
    }

    /// One-step construction, defaults filled in
    pub fn from_name<S, V>(
        &self,
        type_name: &str,
        values: impl IntoIterator<Item = (S, V)>,
    ) -> Result<QualifierKey>
    where
        S: AsRef<str>,
        V: Into<HostValue>,
    {
        self.builder(type_name)?.build_filled(values)
    }

    /// The zero-element qualifier of `type_name`
    pub fn marker_for(&self, type_name: &str) -> Result<QualifierKey> {
        if self.config.intern_markers {
            return self.markers.marker_for(self.oracle(), type_name);
        }
        let declaration = self
            .oracle
            .declaration_of(type_name)
            .ok_or_else(|| QualifierError::configuration(type_name))?;
        CanonicalCache::build_marker(declaration)
    }

    /// `marker_for` keyed by a type descriptor
    pub fn marker_for_type(&self, t: &TypeRef) -> Result<QualifierKey> {
        let name = self.canonical_name(t);
        self.marker_for(&name)
    }

    /// Canonical name of `t`, LRU-cached
    pub fn canonical_name(&self, t: &TypeRef) -> Arc<str> {
        self.type_names.canonical_name(t)
    }

    pub fn type_name_stats(&self) -> CacheStats {
        self.type_names.stats()
    }

    pub fn cached_markers(&self) -> usize {
        self.markers.len()
    }

    /// Empty mutable set on the configured backend
    pub fn new_set(&self) -> ConfiguredSet {
        ConfiguredSet::with_backend(ConfiguredBackend::new(self.config.default_backend))
    }

    /// Empty mutable map on the configured backend
    pub fn new_map<V: Clone>(&self) -> ConfiguredMap<V> {
        ConfiguredMap::with_backend(ConfiguredBackend::new(self.config.default_backend))
    }

    /// Forget every cached marker and type name
    pub fn reset(&self) {
        self.markers.clear();
        self.type_names.clear();
        debug!("qualifier context reset");
    }
}

impl std::fmt::Debug for QualifierContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualifierContext")
            .field("config", &self.config)
            .field("cached_markers", &self.markers.len())
            .field("cached_type_names", &self.type_names.len())
            .finish()
    }
}
