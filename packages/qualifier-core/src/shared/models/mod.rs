//! Shared models

pub mod type_ref;

pub use type_ref::{DeclaredKind, PrimitiveKind, TypeRef};
