use std::sync::Arc;

use crate::features::qualifier::domain::QualifierDeclaration;
use crate::shared::models::TypeRef;

/// Boundary to the host compiler's semantic model
///
/// Supplies qualifier declarations and answers the type-system queries the
/// builder needs while validating element values.
pub trait TypeOracle: Send + Sync {
    /// Declaration of a qualifier type, `None` if the type is not available
    fn declaration_of(&self, type_name: &str) -> Option<Arc<QualifierDeclaration>>;

    /// Assignability of erased types
    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool;

    /// Boxed type for primitives, erasure for everything else
    fn erasure_or_box(&self, t: &TypeRef) -> TypeRef {
        t.boxed()
    }
}

impl<T: TypeOracle + ?Sized> TypeOracle for Arc<T> {
    fn declaration_of(&self, type_name: &str) -> Option<Arc<QualifierDeclaration>> {
        (**self).declaration_of(type_name)
    }

    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        (**self).is_subtype(sub, sup)
    }

    fn erasure_or_box(&self, t: &TypeRef) -> TypeRef {
        (**self).erasure_or_box(t)
    }
}
