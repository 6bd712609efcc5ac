pub mod mutability;
pub mod order;

pub use mutability::Mutability;
pub use order::{CanonicalOrder, KeyOrder, OrderedKey, StructuralOrder};
