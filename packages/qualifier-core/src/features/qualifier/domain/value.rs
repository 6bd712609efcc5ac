//! Element values
//!
//! `ValueDescriptor` is the closed set of shapes a qualifier element can hold.
//! Absence is never a descriptor: a missing element is simply not present in
//! the owning key.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::key::QualifierKey;
use crate::shared::models::TypeRef;

/// One element value of a qualifier
#[derive(Debug, Clone)]
pub enum ValueDescriptor {
    Bool(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// `DeclaringType.CONSTANT`
    EnumConstant {
        declaring_type: String,
        constant: String,
    },
    /// Class literal, stored erased (or boxed for primitives)
    TypeReference(TypeRef),
    NestedQualifier(QualifierKey),
    /// Array value; order is significant
    List(Vec<ValueDescriptor>),
}

/// Callback-per-variant dispatch over a descriptor
///
/// `ValueDescriptor::accept` invokes exactly the callback matching the tag.
pub trait ValueVisitor {
    type Output;

    fn visit_bool(&mut self, value: bool) -> Self::Output;
    fn visit_byte(&mut self, value: i8) -> Self::Output;
    fn visit_char(&mut self, value: char) -> Self::Output;
    fn visit_short(&mut self, value: i16) -> Self::Output;
    fn visit_int(&mut self, value: i32) -> Self::Output;
    fn visit_long(&mut self, value: i64) -> Self::Output;
    fn visit_float(&mut self, value: f32) -> Self::Output;
    fn visit_double(&mut self, value: f64) -> Self::Output;
    fn visit_string(&mut self, value: &str) -> Self::Output;
    fn visit_enum_constant(&mut self, declaring_type: &str, constant: &str) -> Self::Output;
    fn visit_type(&mut self, value: &TypeRef) -> Self::Output;
    fn visit_qualifier(&mut self, value: &QualifierKey) -> Self::Output;
    fn visit_list(&mut self, values: &[ValueDescriptor]) -> Self::Output;
}

impl ValueDescriptor {
    pub fn string(value: impl Into<String>) -> Self {
        ValueDescriptor::String(value.into())
    }

    pub fn enum_constant(declaring_type: impl Into<String>, constant: impl Into<String>) -> Self {
        ValueDescriptor::EnumConstant {
            declaring_type: declaring_type.into(),
            constant: constant.into(),
        }
    }

    pub fn accept<V: ValueVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            ValueDescriptor::Bool(v) => visitor.visit_bool(*v),
            ValueDescriptor::Byte(v) => visitor.visit_byte(*v),
            ValueDescriptor::Char(v) => visitor.visit_char(*v),
            ValueDescriptor::Short(v) => visitor.visit_short(*v),
            ValueDescriptor::Int(v) => visitor.visit_int(*v),
            ValueDescriptor::Long(v) => visitor.visit_long(*v),
            ValueDescriptor::Float(v) => visitor.visit_float(*v),
            ValueDescriptor::Double(v) => visitor.visit_double(*v),
            ValueDescriptor::String(v) => visitor.visit_string(v),
            ValueDescriptor::EnumConstant {
                declaring_type,
                constant,
            } => visitor.visit_enum_constant(declaring_type, constant),
            ValueDescriptor::TypeReference(t) => visitor.visit_type(t),
            ValueDescriptor::NestedQualifier(key) => visitor.visit_qualifier(key),
            ValueDescriptor::List(values) => visitor.visit_list(values),
        }
    }

    /// Short name of the variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValueDescriptor::Bool(_) => "boolean",
            ValueDescriptor::Byte(_) => "byte",
            ValueDescriptor::Char(_) => "char",
            ValueDescriptor::Short(_) => "short",
            ValueDescriptor::Int(_) => "int",
            ValueDescriptor::Long(_) => "long",
            ValueDescriptor::Float(_) => "float",
            ValueDescriptor::Double(_) => "double",
            ValueDescriptor::String(_) => "string",
            ValueDescriptor::EnumConstant { .. } => "enum constant",
            ValueDescriptor::TypeReference(_) => "class literal",
            ValueDescriptor::NestedQualifier(_) => "qualifier",
            ValueDescriptor::List(_) => "array",
        }
    }

    /// Position of the variant in the structural order
    pub(crate) fn rank(&self) -> u8 {
        match self {
            ValueDescriptor::Bool(_) => 0,
            ValueDescriptor::Byte(_) => 1,
            ValueDescriptor::Char(_) => 2,
            ValueDescriptor::Short(_) => 3,
            ValueDescriptor::Int(_) => 4,
            ValueDescriptor::Long(_) => 5,
            ValueDescriptor::Float(_) => 6,
            ValueDescriptor::Double(_) => 7,
            ValueDescriptor::String(_) => 8,
            ValueDescriptor::EnumConstant { .. } => 9,
            ValueDescriptor::TypeReference(_) => 10,
            ValueDescriptor::NestedQualifier(_) => 11,
            ValueDescriptor::List(_) => 12,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ValueDescriptor::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integral value widened to i64 (byte, short, char, int, long)
    pub fn as_long(&self) -> Option<i64> {
        match self {
            ValueDescriptor::Byte(v) => Some(i64::from(*v)),
            ValueDescriptor::Short(v) => Some(i64::from(*v)),
            ValueDescriptor::Char(v) => Some(i64::from(u32::from(*v))),
            ValueDescriptor::Int(v) => Some(i64::from(*v)),
            ValueDescriptor::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ValueDescriptor::Byte(v) => Some(i32::from(*v)),
            ValueDescriptor::Short(v) => Some(i32::from(*v)),
            ValueDescriptor::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValueDescriptor::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_enum_constant(&self) -> Option<(&str, &str)> {
        match self {
            ValueDescriptor::EnumConstant {
                declaring_type,
                constant,
            } => Some((declaring_type, constant)),
            _ => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeRef> {
        match self {
            ValueDescriptor::TypeReference(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_qualifier(&self) -> Option<&QualifierKey> {
        match self {
            ValueDescriptor::NestedQualifier(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ValueDescriptor]> {
        match self {
            ValueDescriptor::List(values) => Some(values),
            _ => None,
        }
    }
}

impl PartialEq for ValueDescriptor {
    fn eq(&self, other: &Self) -> bool {
        crate::features::qualifier::infrastructure::equivalence::same_value(self, other)
    }
}

impl Eq for ValueDescriptor {}

impl Hash for ValueDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            ValueDescriptor::Bool(v) => v.hash(state),
            ValueDescriptor::Byte(v) => v.hash(state),
            ValueDescriptor::Char(v) => v.hash(state),
            ValueDescriptor::Short(v) => v.hash(state),
            ValueDescriptor::Int(v) => v.hash(state),
            ValueDescriptor::Long(v) => v.hash(state),
            // Bit equality, matching `same_value`
            ValueDescriptor::Float(v) => v.to_bits().hash(state),
            ValueDescriptor::Double(v) => v.to_bits().hash(state),
            ValueDescriptor::String(v) => v.hash(state),
            ValueDescriptor::EnumConstant {
                declaring_type,
                constant,
            } => {
                declaring_type.hash(state);
                constant.hash(state);
            }
            ValueDescriptor::TypeReference(t) => t.hash(state),
            ValueDescriptor::NestedQualifier(key) => key.hash(state),
            ValueDescriptor::List(values) => values.hash(state),
        }
    }
}

impl PartialOrd for ValueDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::features::qualifier::infrastructure::equivalence::compare_values(self, other)
    }
}

/// Renders a descriptor the way it would appear in source
struct SourceRenderer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
}

impl ValueVisitor for SourceRenderer<'_, '_> {
    type Output = fmt::Result;

    fn visit_bool(&mut self, value: bool) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_byte(&mut self, value: i8) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_char(&mut self, value: char) -> fmt::Result {
        write!(self.f, "'{}'", value)
    }

    fn visit_short(&mut self, value: i16) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_int(&mut self, value: i32) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_long(&mut self, value: i64) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_float(&mut self, value: f32) -> fmt::Result {
        write!(self.f, "{:?}", value)
    }

    fn visit_double(&mut self, value: f64) -> fmt::Result {
        write!(self.f, "{:?}", value)
    }

    fn visit_string(&mut self, value: &str) -> fmt::Result {
        write!(self.f, "\"{}\"", value)
    }

    fn visit_enum_constant(&mut self, declaring_type: &str, constant: &str) -> fmt::Result {
        if declaring_type.is_empty() {
            self.f.write_str(constant)
        } else {
            write!(self.f, "{}.{}", declaring_type, constant)
        }
    }

    fn visit_type(&mut self, value: &TypeRef) -> fmt::Result {
        write!(self.f, "{}.class", value)
    }

    fn visit_qualifier(&mut self, value: &QualifierKey) -> fmt::Result {
        write!(self.f, "{}", value)
    }

    fn visit_list(&mut self, values: &[ValueDescriptor]) -> fmt::Result {
        // A singleton array is written without braces
        if let [only] = values {
            return only.accept(self);
        }
        self.f.write_str("{")?;
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.f.write_str(", ")?;
            }
            value.accept(self)?;
        }
        self.f.write_str("}")
    }
}

impl fmt::Display for ValueDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.accept(&mut SourceRenderer { f })
    }
}
