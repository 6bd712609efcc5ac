//! Host type references
//!
//! A minimal mirror of the host compiler's type model: enough to name the
//! declared type of a qualifier element, check assignability through a
//! `TypeOracle`, and render canonical names.

use std::fmt;

/// Fully-qualified name of the class-literal type
pub const CLASS_TYPE_NAME: &str = "java.lang.Class";

/// Fully-qualified name of the root reference type
pub const OBJECT_TYPE_NAME: &str = "java.lang.Object";

/// Fully-qualified name of the string type
pub const STRING_TYPE_NAME: &str = "java.lang.String";

/// Primitive type kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// Source keyword of the primitive
    pub fn keyword(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Fully-qualified name of the boxed counterpart
    pub fn boxed_name(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "java.lang.Boolean",
            PrimitiveKind::Byte => "java.lang.Byte",
            PrimitiveKind::Char => "java.lang.Character",
            PrimitiveKind::Short => "java.lang.Short",
            PrimitiveKind::Int => "java.lang.Integer",
            PrimitiveKind::Long => "java.lang.Long",
            PrimitiveKind::Float => "java.lang.Float",
            PrimitiveKind::Double => "java.lang.Double",
        }
    }

    /// Whether the boxed type extends `java.lang.Number`
    pub fn is_numeric(&self) -> bool {
        !matches!(self, PrimitiveKind::Boolean | PrimitiveKind::Char)
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(PrimitiveKind::Boolean),
            "byte" => Some(PrimitiveKind::Byte),
            "char" => Some(PrimitiveKind::Char),
            "short" => Some(PrimitiveKind::Short),
            "int" => Some(PrimitiveKind::Int),
            "long" => Some(PrimitiveKind::Long),
            "float" => Some(PrimitiveKind::Float),
            "double" => Some(PrimitiveKind::Double),
            _ => None,
        }
    }
}

/// Kind of a declared (named reference) type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclaredKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Erased reference to a host type
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeRef {
    /// int, boolean, ...
    Primitive(PrimitiveKind),
    /// Named class, interface, enum or annotation type
    Declared { name: String, kind: DeclaredKind },
    /// Array with the given component type
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypeRef::Primitive(kind)
    }

    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            kind: DeclaredKind::Class,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            kind: DeclaredKind::Interface,
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            kind: DeclaredKind::Enum,
        }
    }

    pub fn annotation(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            kind: DeclaredKind::Annotation,
        }
    }

    pub fn array_of(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    pub fn string() -> Self {
        Self::class(STRING_TYPE_NAME)
    }

    pub fn object() -> Self {
        Self::class(OBJECT_TYPE_NAME)
    }

    /// The `Class<?>` slot type used by class-literal elements
    pub fn class_literal() -> Self {
        Self::class(CLASS_TYPE_NAME)
    }

    /// Boxed counterpart of a primitive; other types unchanged
    pub fn boxed(&self) -> TypeRef {
        match self {
            TypeRef::Primitive(kind) => TypeRef::class(kind.boxed_name()),
            other => other.clone(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeRef::Array(_))
    }

    pub fn component(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Array(component) => Some(component),
            _ => None,
        }
    }

    /// Name of a declared type, `None` for primitives and arrays
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            TypeRef::Declared { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn declared_kind(&self) -> Option<DeclaredKind> {
        match self {
            TypeRef::Declared { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_annotation(&self) -> bool {
        self.declared_kind() == Some(DeclaredKind::Annotation)
    }

    pub fn is_enum(&self) -> bool {
        self.declared_kind() == Some(DeclaredKind::Enum)
    }

    /// Whether this is the `java.lang.Class` slot type
    pub fn is_class_literal(&self) -> bool {
        self.declared_name() == Some(CLASS_TYPE_NAME)
    }

    /// Canonical source name: `int`, `java.lang.String`, `int[]`
    pub fn canonical_name(&self) -> String {
        match self {
            TypeRef::Primitive(kind) => kind.keyword().to_string(),
            TypeRef::Declared { name, .. } => name.clone(),
            TypeRef::Array(component) => format!("{}[]", component.canonical_name()),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(kind) => f.write_str(kind.keyword()),
            TypeRef::Declared { name, .. } => f.write_str(name),
            TypeRef::Array(component) => write!(f, "{}[]", component),
        }
    }
}
