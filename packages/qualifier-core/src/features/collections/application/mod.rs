pub mod factories;
pub mod map;
pub mod set;

use crate::features::collections::domain::StructuralOrder;
use crate::features::collections::infrastructure::{ConfiguredBackend, SortedArrayBackend, TreeBackend};

pub use factories::{
    empty_map, empty_set, mutable_array_map, mutable_array_set, mutable_map, mutable_set, singleton,
    unmodifiable_map, unmodifiable_set,
};
pub use map::QualifierMap;
pub use set::QualifierSet;

pub type TreeQualifierSet = QualifierSet<TreeBackend<()>>;
pub type ArrayQualifierSet = QualifierSet<SortedArrayBackend<()>>;
/// Set keyed by `same`; same-type keys with different values coexist
pub type StructuralTreeSet = QualifierSet<TreeBackend<(), StructuralOrder>>;
pub type StructuralArraySet = QualifierSet<SortedArrayBackend<(), StructuralOrder>>;
pub type ConfiguredSet = QualifierSet<ConfiguredBackend<()>>;

pub type TreeQualifierMap<V> = QualifierMap<V, TreeBackend<V>>;
pub type ArrayQualifierMap<V> = QualifierMap<V, SortedArrayBackend<V>>;
pub type StructuralTreeMap<V> = QualifierMap<V, TreeBackend<V, StructuralOrder>>;
pub type ConfiguredMap<V> = QualifierMap<V, ConfiguredBackend<V>>;
