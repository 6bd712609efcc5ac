//! Container lifecycle: `Mutable -> Unmodifiable`, no way back

use crate::errors::{QualifierError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    #[default]
    Mutable,
    Unmodifiable,
}

impl Mutability {
    pub fn is_mutable(self) -> bool {
        self == Mutability::Mutable
    }

    /// Fail `operation` unless still mutable
    pub fn check(self, operation: &'static str) -> Result<()> {
        match self {
            Mutability::Mutable => Ok(()),
            Mutability::Unmodifiable => Err(QualifierError::unmodifiable(operation)),
        }
    }
}
