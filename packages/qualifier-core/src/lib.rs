/*
 * Qualifier Core - annotation value model and equivalence-based collections
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (TypeRef)
 * - features/    : qualifier (values, builder, equivalence, caches)
 *                  collections (Set/Map over tree and sorted-array backends)
 * - config/      : Presets + YAML configuration
 *
 * Qualifier keys are immutable and Arc-backed; they are compared by
 * structural `same`, never by identity.
 */

// Crate-level lint configuration
#![allow(clippy::type_complexity)] // Backend entry types are necessarily nested
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{BackendKind, ConfigError, Preset, QualifierConfig};
pub use errors::{BugKind, QualifierError, Result};
pub use features::collections::{
    empty_map, empty_set, mutable_array_map, mutable_array_set, mutable_map, mutable_set,
    singleton, unmodifiable_map, unmodifiable_set, ArrayQualifierMap, ArrayQualifierSet,
    CanonicalOrder, ConfiguredMap, ConfiguredSet, KeyOrder, QualifierMap, QualifierSet,
    StructuralArraySet, StructuralOrder, StructuralTreeMap, StructuralTreeSet, TreeQualifierMap,
    TreeQualifierSet,
};
pub use features::qualifier::infrastructure::equivalence::{
    canonical_order, contains_same, get_same, same, same_element_values, same_type,
    structural_order,
};
pub use features::qualifier::{
    DeclarationRegistry, DeclaredElementSignature, HostValue, QualifierBuilder, QualifierContext,
    QualifierDeclaration, QualifierKey, TypeOracle, ValueDescriptor, ValueVisitor,
};
pub use shared::models::{DeclaredKind, PrimitiveKind, TypeRef};
