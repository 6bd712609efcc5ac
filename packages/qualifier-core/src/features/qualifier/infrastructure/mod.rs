//! Qualifier infrastructure
//!
//! - builder: validated, single-use construction
//! - equivalence: `same` / ordering / collection helpers
//! - canonical_cache: interned markers and type-name LRU
//! - declaration_registry: in-memory `TypeOracle`

pub mod builder;
pub mod canonical_cache;
pub mod declaration_registry;
pub mod equivalence;

pub use builder::QualifierBuilder;
pub use canonical_cache::{CacheStats, CanonicalCache, TypeNameCache, TYPE_NAME_CACHE_CAPACITY};
pub use declaration_registry::DeclarationRegistry;
pub use equivalence::{
    canonical_order, compare_values, contains_same, contains_same_by_name, get_by_name, get_same,
    same, same_by_name, same_collections, same_element_values, same_type, same_value,
    structural_order, to_string_simple,
};
