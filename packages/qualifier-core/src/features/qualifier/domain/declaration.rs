//! Qualifier type declarations
//!
//! Supplied by the host per qualifier type; consumed, never owned, by keys
//! (shared through `Arc`).

use super::value::ValueDescriptor;
use crate::shared::models::TypeRef;

/// `(name, declaredType, optionalDefaultValue)` of one element
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredElementSignature {
    pub name: String,
    pub declared_type: TypeRef,
    pub default: Option<ValueDescriptor>,
}

impl DeclaredElementSignature {
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            default: None,
        }
    }

    pub fn with_default(
        name: impl Into<String>,
        declared_type: TypeRef,
        default: ValueDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            default: Some(default),
        }
    }
}

/// Declaration of one qualifier (annotation) type
#[derive(Debug, Clone, PartialEq)]
pub struct QualifierDeclaration {
    type_name: String,
    elements: Vec<DeclaredElementSignature>,
}

impl QualifierDeclaration {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            elements: Vec::new(),
        }
    }

    /// Add an element without a default
    pub fn element(mut self, name: impl Into<String>, declared_type: TypeRef) -> Self {
        self.push(DeclaredElementSignature::new(name, declared_type));
        self
    }

    /// Add an element with a default value
    pub fn element_with_default(
        mut self,
        name: impl Into<String>,
        declared_type: TypeRef,
        default: ValueDescriptor,
    ) -> Self {
        self.push(DeclaredElementSignature::with_default(
            name,
            declared_type,
            default,
        ));
        self
    }

    // Redeclaring a name replaces the earlier signature
    fn push(&mut self, signature: DeclaredElementSignature) {
        match self.elements.iter_mut().find(|e| e.name == signature.name) {
            Some(existing) => *existing = signature,
            None => self.elements.push(signature),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The annotation type this declaration introduces
    pub fn as_type(&self) -> TypeRef {
        TypeRef::annotation(self.type_name.clone())
    }

    pub fn elements(&self) -> &[DeclaredElementSignature] {
        &self.elements
    }

    pub fn find_element(&self, name: &str) -> Option<&DeclaredElementSignature> {
        self.elements.iter().find(|e| e.name == name)
    }

    pub fn has_element(&self, name: &str) -> bool {
        self.find_element(name).is_some()
    }

    /// Whether every element has a default (a zero-argument use is legal)
    pub fn all_defaulted(&self) -> bool {
        self.elements.iter().all(|e| e.default.is_some())
    }
}
