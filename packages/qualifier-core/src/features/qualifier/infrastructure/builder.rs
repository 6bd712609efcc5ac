//! Qualifier builder
//!
//! Staged, single-use construction of one `QualifierKey`. Every assigned value
//! is checked against the declared element type before it is stored; the
//! first `build()` freezes the builder and every later call fails.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::errors::{BugKind, QualifierError, Result};
use crate::features::qualifier::domain::{
    HostValue, QualifierDeclaration, QualifierKey, ValueDescriptor,
};
use crate::features::qualifier::ports::TypeOracle;
use crate::shared::models::TypeRef;

use super::canonical_cache::TypeNameCache;

/// Builder for one immutable qualifier
pub struct QualifierBuilder<'o> {
    oracle: &'o dyn TypeOracle,
    type_names: Option<&'o TypeNameCache>,
    declaration: Arc<QualifierDeclaration>,
    elements: IndexMap<String, ValueDescriptor>,
    built: bool,
}

impl std::fmt::Debug for QualifierBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QualifierBuilder")
            .field("type_name", &self.type_name())
            .field("elements", &self.elements)
            .field("built", &self.built)
            .finish()
    }
}

impl<'o> QualifierBuilder<'o> {
    /// Start a builder for `type_name` with no elements set
    ///
    /// Fails with a configuration error if the type is not declared.
    pub fn create(oracle: &'o dyn TypeOracle, type_name: &str) -> Result<Self> {
        let declaration = oracle
            .declaration_of(type_name)
            .ok_or_else(|| QualifierError::configuration(type_name))?;
        trace!(type_name, "created qualifier builder");
        Ok(Self::with_declaration(oracle, declaration))
    }

    pub fn with_declaration(oracle: &'o dyn TypeOracle, declaration: Arc<QualifierDeclaration>) -> Self {
        Self {
            oracle,
            type_names: None,
            declaration,
            elements: IndexMap::new(),
            built: false,
        }
    }

    /// Resolve type names through `cache` while checking assignments
    pub fn with_type_names(mut self, cache: &'o TypeNameCache) -> Self {
        self.type_names = Some(cache);
        self
    }

    /// Start from a copy of `key`: same type, same explicit elements
    pub fn from_key(oracle: &'o dyn TypeOracle, key: &QualifierKey) -> Self {
        let elements = key
            .explicit_elements()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Self {
            oracle,
            type_names: None,
            declaration: Arc::clone(key.declaration()),
            elements,
            built: false,
        }
    }

    /// Build `type_name` in one step, filling unspecified elements from their
    /// declared defaults
    pub fn from_name<S, V>(
        oracle: &'o dyn TypeOracle,
        type_name: &str,
        values: impl IntoIterator<Item = (S, V)>,
    ) -> Result<QualifierKey>
    where
        S: AsRef<str>,
        V: Into<HostValue>,
    {
        Self::create(oracle, type_name)?.build_filled(values)
    }

    /// Assign `values`, write every remaining element's default and build
    pub fn build_filled<S, V>(mut self, values: impl IntoIterator<Item = (S, V)>) -> Result<QualifierKey>
    where
        S: AsRef<str>,
        V: Into<HostValue>,
    {
        for (name, value) in values {
            self.assign(name.as_ref(), value)?;
        }
        let declaration = Arc::clone(&self.declaration);
        for element in declaration.elements() {
            if self.elements.contains_key(&element.name) {
                continue;
            }
            let default = element.default.clone().ok_or_else(|| {
                QualifierError::bug(BugKind::MissingDefault {
                    element: element.name.clone(),
                    type_name: declaration.type_name().to_string(),
                })
            })?;
            self.elements.insert(element.name.clone(), default);
        }
        self.build()
    }

    pub fn type_name(&self) -> &str {
        self.declaration.type_name()
    }

    pub fn declaration(&self) -> &Arc<QualifierDeclaration> {
        &self.declaration
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn ensure_not_built(&self) -> Result<()> {
        if self.built {
            return Err(QualifierError::bug(BugKind::AlreadyBuilt {
                type_name: self.type_name().to_string(),
            }));
        }
        Ok(())
    }

    /// Declared type of `name` on the target type
    fn declared_type(&self, name: &str) -> Result<TypeRef> {
        self.declaration
            .find_element(name)
            .map(|e| e.declared_type.clone())
            .ok_or_else(|| QualifierError::unknown_element(name, self.type_name()))
    }

    /// Copy every explicit element of `key` except the ignorable ones
    ///
    /// A copied element that the target type does not declare is a bug.
    pub fn copy_from(&mut self, key: &QualifierKey, ignorable: &[&str]) -> Result<&mut Self> {
        self.ensure_not_built()?;
        for (name, value) in key.explicit_elements() {
            if ignorable.contains(&name) {
                continue;
            }
            if !self.declaration.has_element(name) {
                return Err(QualifierError::unknown_element(name, self.type_name()));
            }
            self.elements.insert(name.to_string(), value.clone());
        }
        Ok(self)
    }

    /// Copy the elements of `key` named in `renaming`, under their new names
    ///
    /// Source elements absent from the map are dropped.
    pub fn copy_renaming(
        &mut self,
        key: &QualifierKey,
        renaming: &HashMap<String, String>,
    ) -> Result<&mut Self> {
        self.ensure_not_built()?;
        for (name, value) in key.explicit_elements() {
            let Some(target) = renaming.get(name) else {
                continue;
            };
            if !self.declaration.has_element(target) {
                return Err(QualifierError::unknown_element(target.as_str(), self.type_name()));
            }
            self.elements.insert(target.clone(), value.clone());
        }
        Ok(self)
    }

    /// Set element `name` to `value`; the last write wins
    pub fn assign(&mut self, name: &str, value: impl Into<HostValue>) -> Result<&mut Self> {
        self.ensure_not_built()?;
        let expected = self.declared_type(name)?;
        let descriptor = self.convert(name, &expected, value.into())?;
        self.elements.insert(name.to_string(), descriptor);
        Ok(self)
    }

    /// Set an array-typed element from a sequence of values
    pub fn set_list<T: Into<HostValue>>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = T>,
    ) -> Result<&mut Self> {
        self.assign(name, HostValue::array(values))
    }

    /// Drop an explicitly set element; a no-op if it was never set
    pub fn remove_element(&mut self, name: &str) -> Result<&mut Self> {
        self.ensure_not_built()?;
        self.declared_type(name)?;
        self.elements.shift_remove(name);
        Ok(self)
    }

    /// Produce the immutable key; only the first call succeeds
    pub fn build(&mut self) -> Result<QualifierKey> {
        self.ensure_not_built()?;
        self.built = true;
        let elements = std::mem::take(&mut self.elements);
        debug!(
            type_name = self.type_name(),
            elements = elements.len(),
            "built qualifier"
        );
        Ok(QualifierKey::from_parts(
            Arc::clone(&self.declaration),
            elements,
        ))
    }

    /// Name equality first when a cache is attached, the oracle otherwise
    fn is_assignable(&self, found: &TypeRef, expected: &TypeRef) -> bool {
        match self.type_names {
            Some(names) => {
                names.canonical_name(found) == names.canonical_name(expected)
                    || self.oracle.is_subtype(found, expected)
            }
            None => {
                self.oracle.is_subtype(found, expected)
                    || found.canonical_name() == expected.canonical_name()
            }
        }
    }

    fn convert(&self, element: &str, expected: &TypeRef, value: HostValue) -> Result<ValueDescriptor> {
        match (expected, value) {
            (TypeRef::Array(component), HostValue::Array(items)) => items
                .into_iter()
                .map(|item| self.convert_component(element, component, item))
                .collect::<Result<Vec<_>>>()
                .map(ValueDescriptor::List),
            (TypeRef::Array(_), other) => Err(QualifierError::type_mismatch(
                element,
                other.erased_type(),
                expected,
            )),
            (_, value) => self.convert_component(element, expected, value),
        }
    }

    /// Check one non-array value against `expected`
    fn convert_component(
        &self,
        element: &str,
        expected: &TypeRef,
        value: HostValue,
    ) -> Result<ValueDescriptor> {
        let expected = self.oracle.erasure_or_box(expected);
        let mismatch = |found: TypeRef| QualifierError::type_mismatch(element, found, &expected);

        match value {
            HostValue::Opaque(t) => Err(QualifierError::bug(BugKind::UnsupportedValue {
                found: t.canonical_name(),
            })),
            HostValue::Array(_) => Err(mismatch(value.erased_type())),
            HostValue::Class(t) => {
                // Any type may be named by a class literal
                if expected.is_class_literal() {
                    Ok(ValueDescriptor::TypeReference(self.oracle.erasure_or_box(&t)))
                } else {
                    Err(mismatch(TypeRef::class_literal()))
                }
            }
            HostValue::Annotation(key) => {
                if expected.is_annotation() && expected.declared_name() == Some(key.type_name()) {
                    Ok(ValueDescriptor::NestedQualifier(key))
                } else {
                    Err(mismatch(key.annotation_type()))
                }
            }
            HostValue::Enum {
                declaring_type,
                constant,
            } => {
                if expected.is_enum() && expected.declared_name() == Some(declaring_type.as_str()) {
                    Ok(ValueDescriptor::EnumConstant {
                        declaring_type,
                        constant,
                    })
                } else {
                    Err(mismatch(TypeRef::enumeration(declaring_type)))
                }
            }
            scalar => {
                let found = scalar.erased_type();
                if !self.is_assignable(&found, &expected) {
                    return Err(mismatch(found));
                }
                scalar_descriptor(scalar).ok_or_else(|| {
                    QualifierError::internal(format!("non-scalar reached scalar conversion for '{}'", element))
                })
            }
        }
    }
}

fn scalar_descriptor(value: HostValue) -> Option<ValueDescriptor> {
    Some(match value {
        HostValue::Bool(v) => ValueDescriptor::Bool(v),
        HostValue::Byte(v) => ValueDescriptor::Byte(v),
        HostValue::Char(v) => ValueDescriptor::Char(v),
        HostValue::Short(v) => ValueDescriptor::Short(v),
        HostValue::Int(v) => ValueDescriptor::Int(v),
        HostValue::Long(v) => ValueDescriptor::Long(v),
        HostValue::Float(v) => ValueDescriptor::Float(v),
        HostValue::Double(v) => ValueDescriptor::Double(v),
        HostValue::String(v) => ValueDescriptor::String(v),
        HostValue::Enum { .. }
        | HostValue::Class(_)
        | HostValue::Annotation(_)
        | HostValue::Array(_)
        | HostValue::Opaque(_) => return None,
    })
}
