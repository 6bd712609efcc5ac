//! Raw values handed over by the host before validation

use super::key::QualifierKey;
use crate::shared::models::TypeRef;

/// A host-side element value, not yet checked against any declaration
#[derive(Debug, Clone)]
pub enum HostValue {
    Bool(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    Enum {
        declaring_type: String,
        constant: String,
    },
    /// A class literal naming the given type
    Class(TypeRef),
    Annotation(QualifierKey),
    Array(Vec<HostValue>),
    /// Any other host object; never a legal element value
    Opaque(TypeRef),
}

impl HostValue {
    pub fn enum_constant(declaring_type: impl Into<String>, constant: impl Into<String>) -> Self {
        HostValue::Enum {
            declaring_type: declaring_type.into(),
            constant: constant.into(),
        }
    }

    pub fn array<T: Into<HostValue>>(values: impl IntoIterator<Item = T>) -> Self {
        HostValue::Array(values.into_iter().map(Into::into).collect())
    }

    /// Erased host type of the value, used for subtype checks and messages
    pub fn erased_type(&self) -> TypeRef {
        use crate::shared::models::PrimitiveKind as P;
        match self {
            HostValue::Bool(_) => TypeRef::class(P::Boolean.boxed_name()),
            HostValue::Byte(_) => TypeRef::class(P::Byte.boxed_name()),
            HostValue::Char(_) => TypeRef::class(P::Char.boxed_name()),
            HostValue::Short(_) => TypeRef::class(P::Short.boxed_name()),
            HostValue::Int(_) => TypeRef::class(P::Int.boxed_name()),
            HostValue::Long(_) => TypeRef::class(P::Long.boxed_name()),
            HostValue::Float(_) => TypeRef::class(P::Float.boxed_name()),
            HostValue::Double(_) => TypeRef::class(P::Double.boxed_name()),
            HostValue::String(_) => TypeRef::string(),
            HostValue::Enum { declaring_type, .. } => TypeRef::enumeration(declaring_type.clone()),
            HostValue::Class(_) => TypeRef::class_literal(),
            HostValue::Annotation(key) => key.annotation_type(),
            HostValue::Array(values) => TypeRef::array_of(
                values
                    .first()
                    .map(HostValue::erased_type)
                    .unwrap_or_else(TypeRef::object),
            ),
            HostValue::Opaque(t) => t.clone(),
        }
    }
}

macro_rules! host_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for HostValue {
                fn from(value: $ty) -> Self {
                    HostValue::$variant(value)
                }
            }
        )*
    };
}

host_value_from! {
    bool => Bool,
    i8 => Byte,
    char => Char,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    TypeRef => Class,
    QualifierKey => Annotation,
}

impl From<&str> for HostValue {
    fn from(value: &str) -> Self {
        HostValue::String(value.to_string())
    }
}

impl From<&QualifierKey> for HostValue {
    fn from(value: &QualifierKey) -> Self {
        HostValue::Annotation(value.clone())
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(values: Vec<T>) -> Self {
        HostValue::array(values)
    }
}
