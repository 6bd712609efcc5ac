//! Equivalence-based Set / Map
//!
//! Containers of `QualifierKey` whose membership is decided by `same`.
//!
//! ## Architecture
//! ```text
//! application/     QualifierSet / QualifierMap, factories
//!   ↓
//! ports/           OrderedBackend trait
//!   ↑
//! infrastructure/  TreeBackend, SortedArrayBackend, ConfiguredBackend
//!   ↓
//! domain/          KeyOrder strategies, Mutability
//! ```
//!
//! Backends sort by a `KeyOrder`. With `CanonicalOrder` (type name only) two
//! keys of one type collide and the later one replaces the earlier; use
//! `StructuralOrder` when same-type keys with different values must coexist.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::*;
pub use domain::{CanonicalOrder, KeyOrder, Mutability, OrderedKey, StructuralOrder};
pub use infrastructure::{ConfiguredBackend, SortedArrayBackend, TreeBackend};
pub use ports::{Entry, OrderedBackend};
