//! In-memory `TypeOracle`
//!
//! Holds registered qualifier declarations and a declared-supertype table.
//! Used to embed the core without a live compiler and in tests.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::qualifier::domain::QualifierDeclaration;
use crate::features::qualifier::ports::TypeOracle;
use crate::shared::models::type_ref::OBJECT_TYPE_NAME;
use crate::shared::models::{DeclaredKind, PrimitiveKind, TypeRef};

const NUMBER_TYPE_NAME: &str = "java.lang.Number";
const ANNOTATION_TYPE_NAME: &str = "java.lang.annotation.Annotation";
const ENUM_TYPE_NAME: &str = "java.lang.Enum";

/// Registry of declarations plus a nominal subtype relation
#[derive(Debug, Clone, Default)]
pub struct DeclarationRegistry {
    declarations: FxHashMap<String, Arc<QualifierDeclaration>>,
    /// type name -> direct supertypes
    supertypes: FxHashMap<String, Vec<String>>,
    /// kinds of names reached through the supertype table
    kinds: FxHashMap<String, DeclaredKind>,
}

impl DeclarationRegistry {
    /// Registry pre-populated with the boxed-primitive and string hierarchy
    pub fn new() -> Self {
        let mut registry = Self::default();
        for kind in [
            PrimitiveKind::Byte,
            PrimitiveKind::Short,
            PrimitiveKind::Int,
            PrimitiveKind::Long,
            PrimitiveKind::Float,
            PrimitiveKind::Double,
        ] {
            registry.declare_supertype(kind.boxed_name(), NUMBER_TYPE_NAME);
        }
        registry.declare_supertype("java.lang.String", "java.lang.CharSequence");
        registry
    }

    /// Register (or replace) a qualifier declaration
    pub fn register(&mut self, declaration: QualifierDeclaration) -> Arc<QualifierDeclaration> {
        let declaration = Arc::new(declaration);
        self.kinds
            .insert(declaration.type_name().to_string(), DeclaredKind::Annotation);
        self.declarations.insert(
            declaration.type_name().to_string(),
            Arc::clone(&declaration),
        );
        declaration
    }

    /// Builder-style `register`
    pub fn with(mut self, declaration: QualifierDeclaration) -> Self {
        self.register(declaration);
        self
    }

    pub fn declare_supertype(&mut self, sub: impl Into<String>, sup: impl Into<String>) {
        let sup = sup.into();
        let entry = self.supertypes.entry(sub.into()).or_default();
        if !entry.contains(&sup) {
            entry.push(sup);
        }
    }

    /// Record the kind of a type that only appears as a supertype
    pub fn declare_kind(&mut self, name: impl Into<String>, kind: DeclaredKind) {
        self.kinds.insert(name.into(), kind);
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn implicit_supertype(kind: DeclaredKind) -> Option<&'static str> {
        match kind {
            DeclaredKind::Annotation => Some(ANNOTATION_TYPE_NAME),
            DeclaredKind::Enum => Some(ENUM_TYPE_NAME),
            DeclaredKind::Class | DeclaredKind::Interface => None,
        }
    }

    /// Nominal reachability over the supertype table
    fn reaches(&self, from: &str, from_kind: DeclaredKind, target: &str) -> bool {
        if from == target || target == OBJECT_TYPE_NAME {
            return true;
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(from);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            if current == target {
                return true;
            }
            let kind = if current == from {
                Some(from_kind)
            } else {
                self.kinds.get(current).copied()
            };
            if kind.and_then(Self::implicit_supertype) == Some(target) {
                return true;
            }
            if let Some(supers) = self.supertypes.get(current) {
                queue.extend(supers.iter().map(String::as_str));
            }
        }
        false
    }
}

impl TypeOracle for DeclarationRegistry {
    fn declaration_of(&self, type_name: &str) -> Option<Arc<QualifierDeclaration>> {
        self.declarations.get(type_name).cloned()
    }

    fn is_subtype(&self, sub: &TypeRef, sup: &TypeRef) -> bool {
        if sub == sup {
            return true;
        }
        match (sub, sup) {
            (TypeRef::Primitive(_), _) | (_, TypeRef::Primitive(_)) => false,
            (TypeRef::Array(a), TypeRef::Array(b)) => {
                if a.is_primitive() || b.is_primitive() {
                    a == b
                } else {
                    self.is_subtype(a, b)
                }
            }
            (TypeRef::Array(_), TypeRef::Declared { name, .. }) => name == OBJECT_TYPE_NAME,
            (TypeRef::Declared { .. }, TypeRef::Array(_)) => false,
            (
                TypeRef::Declared { name, kind },
                TypeRef::Declared {
                    name: target, ..
                },
            ) => self.reaches(name, *kind, target),
        }
    }
}
