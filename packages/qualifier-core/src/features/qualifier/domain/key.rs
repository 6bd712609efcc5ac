//! Qualifier instances
//!
//! A `QualifierKey` is an immutable, cheaply clonable qualifier value: the
//! declaration of its type plus the explicitly written element values in
//! insertion order. Equality is structural (`same`), never identity.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;

use super::declaration::QualifierDeclaration;
use super::value::ValueDescriptor;
use crate::errors::{BugKind, QualifierError, Result};
use crate::shared::models::TypeRef;

struct KeyInner {
    declaration: Arc<QualifierDeclaration>,
    elements: IndexMap<String, ValueDescriptor>,
}

/// Immutable qualifier value
#[derive(Clone)]
pub struct QualifierKey {
    inner: Arc<KeyInner>,
}

impl QualifierKey {
    /// Only the builder and the marker cache construct keys; both uphold the
    /// invariant that every element name is declared.
    pub(crate) fn from_parts(
        declaration: Arc<QualifierDeclaration>,
        elements: IndexMap<String, ValueDescriptor>,
    ) -> Self {
        debug_assert!(elements.keys().all(|name| declaration.has_element(name)));
        Self {
            inner: Arc::new(KeyInner {
                declaration,
                elements,
            }),
        }
    }

    /// Zero-element key of the given type
    pub(crate) fn marker(declaration: Arc<QualifierDeclaration>) -> Self {
        Self::from_parts(declaration, IndexMap::new())
    }

    /// Fully-qualified name of the qualifier type
    pub fn type_name(&self) -> &str {
        self.inner.declaration.type_name()
    }

    /// Last dotted segment of the type name
    pub fn simple_name(&self) -> &str {
        let name = self.type_name();
        name.rsplit('.').next().unwrap_or(name)
    }

    pub fn declaration(&self) -> &Arc<QualifierDeclaration> {
        &self.inner.declaration
    }

    pub fn annotation_type(&self) -> TypeRef {
        self.inner.declaration.as_type()
    }

    /// Identity comparison; the short-circuit of `same`
    pub fn ptr_eq(&self, other: &QualifierKey) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Explicitly written elements, in insertion order
    pub fn explicit_elements(&self) -> impl Iterator<Item = (&str, &ValueDescriptor)> {
        self.inner.elements.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn explicit_len(&self) -> usize {
        self.inner.elements.len()
    }

    pub fn is_marker(&self) -> bool {
        self.inner.elements.is_empty()
    }

    pub fn explicit_value(&self, name: &str) -> Option<&ValueDescriptor> {
        self.inner.elements.get(name)
    }

    /// Explicit value, falling back to the declared default
    pub fn value_or_default(&self, name: &str) -> Option<&ValueDescriptor> {
        self.inner.elements.get(name).or_else(|| {
            self.inner
                .declaration
                .find_element(name)
                .and_then(|e| e.default.as_ref())
        })
    }

    /// Every declared element that has a value, explicit or default
    pub fn elements_with_defaults(&self) -> Vec<(&str, &ValueDescriptor)> {
        self.inner
            .declaration
            .elements()
            .iter()
            .filter_map(|e| {
                self.value_or_default(&e.name)
                    .map(|value| (e.name.as_str(), value))
            })
            .collect()
    }

    /// Whether the element was written explicitly
    pub fn has_element_value(&self, name: &str) -> bool {
        self.inner.elements.contains_key(name)
    }

    fn required(&self, name: &str) -> Result<&ValueDescriptor> {
        self.value_or_default(name).ok_or_else(|| {
            QualifierError::bug(BugKind::NoSuchValue {
                element: name.to_string(),
                type_name: self.type_name().to_string(),
            })
        })
    }

    fn wrong_kind(&self, name: &str, expected: &'static str, found: &ValueDescriptor) -> QualifierError {
        QualifierError::bug(BugKind::WrongValueKind {
            element: name.to_string(),
            expected,
            found: found.kind_name(),
        })
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        let value = self.required(name)?;
        value
            .as_bool()
            .ok_or_else(|| self.wrong_kind(name, "boolean", value))
    }

    pub fn get_int(&self, name: &str) -> Result<i32> {
        let value = self.required(name)?;
        value.as_int().ok_or_else(|| self.wrong_kind(name, "int", value))
    }

    pub fn get_long(&self, name: &str) -> Result<i64> {
        let value = self.required(name)?;
        value.as_long().ok_or_else(|| self.wrong_kind(name, "long", value))
    }

    pub fn get_string(&self, name: &str) -> Result<&str> {
        let value = self.required(name)?;
        value.as_str().ok_or_else(|| self.wrong_kind(name, "string", value))
    }

    /// Constant name of an enum-valued element
    pub fn get_enum_constant(&self, name: &str) -> Result<&str> {
        let value = self.required(name)?;
        value
            .as_enum_constant()
            .map(|(_, constant)| constant)
            .ok_or_else(|| self.wrong_kind(name, "enum constant", value))
    }

    /// Canonical name of a class-literal element
    pub fn get_class_name(&self, name: &str) -> Result<String> {
        let value = self.required(name)?;
        value
            .as_type()
            .map(TypeRef::canonical_name)
            .ok_or_else(|| self.wrong_kind(name, "class literal", value))
    }

    pub fn get_nested(&self, name: &str) -> Result<&QualifierKey> {
        let value = self.required(name)?;
        value
            .as_qualifier()
            .ok_or_else(|| self.wrong_kind(name, "qualifier", value))
    }

    fn get_list(&self, name: &str) -> Result<&[ValueDescriptor]> {
        let value = self.required(name)?;
        value.as_list().ok_or_else(|| self.wrong_kind(name, "array", value))
    }

    pub fn get_string_list(&self, name: &str) -> Result<Vec<&str>> {
        self.get_list(name)?
            .iter()
            .map(|v| v.as_str().ok_or_else(|| self.wrong_kind(name, "string", v)))
            .collect()
    }

    pub fn get_int_list(&self, name: &str) -> Result<Vec<i32>> {
        self.get_list(name)?
            .iter()
            .map(|v| v.as_int().ok_or_else(|| self.wrong_kind(name, "int", v)))
            .collect()
    }

    /// Constant names of an enum-array element, in declaration order
    pub fn get_enum_constant_list(&self, name: &str) -> Result<Vec<&str>> {
        self.get_list(name)?
            .iter()
            .map(|v| {
                v.as_enum_constant()
                    .map(|(_, constant)| constant)
                    .ok_or_else(|| self.wrong_kind(name, "enum constant", v))
            })
            .collect()
    }

    /// Canonical names of a class-literal array element
    pub fn get_class_names(&self, name: &str) -> Result<Vec<String>> {
        self.get_list(name)?
            .iter()
            .map(|v| {
                v.as_type()
                    .map(TypeRef::canonical_name)
                    .ok_or_else(|| self.wrong_kind(name, "class literal", v))
            })
            .collect()
    }

    /// Whether a string-array element contains `needle`
    pub fn value_contains(&self, name: &str, needle: &str) -> Result<bool> {
        Ok(self.get_string_list(name)?.contains(&needle))
    }
}

impl PartialEq for QualifierKey {
    fn eq(&self, other: &Self) -> bool {
        crate::features::qualifier::infrastructure::equivalence::same(self, other)
    }
}

impl Eq for QualifierKey {}

impl Hash for QualifierKey {
    // Type name only: keys that are `same` always share it, whatever
    // declaration version each was built against.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name().hash(state);
    }
}

impl fmt::Display for QualifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.type_name())?;
        let elements = &self.inner.elements;
        if elements.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        let len = elements.len();
        for (i, (name, value)) in elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if len > 1 || name != "value" {
                write!(f, "{}=", name)?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

impl fmt::Debug for QualifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifierKey({})", self)
    }
}
