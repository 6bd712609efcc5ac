//! Structural equivalence and ordering of qualifiers
//!
//! `same` is the governing equivalence: identity, or same type name and the
//! same effective value for every declared element. An element left at its
//! default is indistinguishable from the default written out.
//!
//! Two orders are provided:
//! - `canonical_order` compares type names only. Keys of one type with
//!   different values compare `Equal`, so a container ordered by it holds at
//!   most one key per type and replaces on collision.
//! - `structural_order` is a total order consistent with `same`.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::features::qualifier::domain::{QualifierKey, ValueDescriptor};

/// Same qualifier type (string equality of the type names)
pub fn same_type(a: &QualifierKey, b: &QualifierKey) -> bool {
    a.ptr_eq(b) || a.type_name() == b.type_name()
}

/// Whether `key` is of the type named `type_name`
pub fn same_by_name(key: &QualifierKey, type_name: &str) -> bool {
    key.type_name() == type_name
}

/// Structural equivalence of two qualifiers
pub fn same(a: &QualifierKey, b: &QualifierKey) -> bool {
    a.ptr_eq(b) || (same_type(a, b) && same_element_values(a, b))
}

/// Names of every element declared on either side
///
/// Both sides normally share one declaration; the union only matters when
/// two declaration versions of the same type name meet.
fn declared_names<'a>(a: &'a QualifierKey, b: &'a QualifierKey) -> BTreeSet<&'a str> {
    let mut names: BTreeSet<&str> = a
        .declaration()
        .elements()
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    if !std::sync::Arc::ptr_eq(a.declaration(), b.declaration()) {
        names.extend(b.declaration().elements().iter().map(|e| e.name.as_str()));
    }
    names
}

/// Compare the effective (explicit or default) value of every declared element
pub fn same_element_values(a: &QualifierKey, b: &QualifierKey) -> bool {
    if a.ptr_eq(b) {
        return true;
    }
    declared_names(a, b).into_iter().all(|name| {
        match (a.value_or_default(name), b.value_or_default(name)) {
            (Some(x), Some(y)) => same_value(x, y),
            (None, None) => true,
            _ => false,
        }
    })
}

/// Recursive value equality; arrays compare positionally
pub fn same_value(a: &ValueDescriptor, b: &ValueDescriptor) -> bool {
    use ValueDescriptor as V;
    match (a, b) {
        (V::Bool(x), V::Bool(y)) => x == y,
        (V::Byte(x), V::Byte(y)) => x == y,
        (V::Char(x), V::Char(y)) => x == y,
        (V::Short(x), V::Short(y)) => x == y,
        (V::Int(x), V::Int(y)) => x == y,
        (V::Long(x), V::Long(y)) => x == y,
        (V::Float(x), V::Float(y)) => x.to_bits() == y.to_bits(),
        (V::Double(x), V::Double(y)) => x.to_bits() == y.to_bits(),
        (V::String(x), V::String(y)) => x == y,
        (
            V::EnumConstant {
                declaring_type: t1,
                constant: c1,
            },
            V::EnumConstant {
                declaring_type: t2,
                constant: c2,
            },
        ) => t1 == t2 && c1 == c2,
        (V::TypeReference(x), V::TypeReference(y)) => x == y,
        (V::NestedQualifier(x), V::NestedQualifier(y)) => same(x, y),
        (V::List(xs), V::List(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_value(x, y))
        }
        _ => false,
    }
}

/// Storage order: type name only
pub fn canonical_order(a: &QualifierKey, b: &QualifierKey) -> Ordering {
    if a.ptr_eq(b) {
        return Ordering::Equal;
    }
    a.type_name().cmp(b.type_name())
}

/// Total order consistent with `same`
///
/// Type name first, then declared elements by name comparing effective
/// values. A missing value sorts before a present one.
pub fn structural_order(a: &QualifierKey, b: &QualifierKey) -> Ordering {
    if a.ptr_eq(b) {
        return Ordering::Equal;
    }
    let by_name = a.type_name().cmp(b.type_name());
    if by_name != Ordering::Equal {
        return by_name;
    }
    for name in declared_names(a, b) {
        let result = match (a.value_or_default(name), b.value_or_default(name)) {
            (Some(x), Some(y)) => compare_values(x, y),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Total order over values; `Equal` exactly when `same_value` holds
pub fn compare_values(a: &ValueDescriptor, b: &ValueDescriptor) -> Ordering {
    use ValueDescriptor as V;
    match (a, b) {
        (V::Bool(x), V::Bool(y)) => x.cmp(y),
        (V::Byte(x), V::Byte(y)) => x.cmp(y),
        (V::Char(x), V::Char(y)) => x.cmp(y),
        (V::Short(x), V::Short(y)) => x.cmp(y),
        (V::Int(x), V::Int(y)) => x.cmp(y),
        (V::Long(x), V::Long(y)) => x.cmp(y),
        (V::Float(x), V::Float(y)) => x.total_cmp(y),
        (V::Double(x), V::Double(y)) => x.total_cmp(y),
        (V::String(x), V::String(y)) => x.cmp(y),
        (
            V::EnumConstant {
                declaring_type: t1,
                constant: c1,
            },
            V::EnumConstant {
                declaring_type: t2,
                constant: c2,
            },
        ) => t1.cmp(t2).then_with(|| c1.cmp(c2)),
        (V::TypeReference(x), V::TypeReference(y)) => x.cmp(y),
        (V::NestedQualifier(x), V::NestedQualifier(y)) => structural_order(x, y),
        (V::List(xs), V::List(ys)) => xs.len().cmp(&ys.len()).then_with(|| {
            xs.iter()
                .zip(ys)
                .map(|(x, y)| compare_values(x, y))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        }),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Whether some member of `collection` is `same` as `key`
pub fn contains_same<'a, I>(collection: I, key: &QualifierKey) -> bool
where
    I: IntoIterator<Item = &'a QualifierKey>,
{
    get_same(collection, key).is_some()
}

/// The member of `collection` that is `same` as `key`
pub fn get_same<'a, I>(collection: I, key: &QualifierKey) -> Option<&'a QualifierKey>
where
    I: IntoIterator<Item = &'a QualifierKey>,
{
    collection.into_iter().find(|member| same(member, key))
}

pub fn contains_same_by_name<'a, I>(collection: I, type_name: &str) -> bool
where
    I: IntoIterator<Item = &'a QualifierKey>,
{
    get_by_name(collection, type_name).is_some()
}

/// The first member of `collection` whose type is `type_name`
pub fn get_by_name<'a, I>(collection: I, type_name: &str) -> Option<&'a QualifierKey>
where
    I: IntoIterator<Item = &'a QualifierKey>,
{
    collection
        .into_iter()
        .find(|member| same_by_name(member, type_name))
}

/// Element-wise `same` of two collections, ignoring their order
pub fn same_collections(c1: &[QualifierKey], c2: &[QualifierKey]) -> bool {
    if c1.len() != c2.len() {
        return false;
    }
    if c1.len() == 1 {
        return same(&c1[0], &c2[0]);
    }
    let mut s1: Vec<&QualifierKey> = c1.iter().collect();
    let mut s2: Vec<&QualifierKey> = c2.iter().collect();
    s1.sort_by(|a, b| structural_order(a, b));
    s2.sort_by(|a, b| structural_order(a, b));
    s1.iter().zip(&s2).all(|(a, b)| same(a, b))
}

/// `{@A, @B}` using simple names and no element values
pub fn to_string_simple<'a, I>(collection: I) -> String
where
    I: IntoIterator<Item = &'a QualifierKey>,
{
    let names: Vec<String> = collection
        .into_iter()
        .map(|key| format!("@{}", key.simple_name()))
        .collect();
    format!("{{{}}}", names.join(", "))
}
