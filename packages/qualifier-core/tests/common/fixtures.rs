//! Test fixture generators
//!
//! A declaration registry covering every element shape, plus helpers that
//! build keys against it.

use qualifier_core::{
    DeclarationRegistry, HostValue, PrimitiveKind, QualifierBuilder, QualifierDeclaration,
    QualifierKey, TypeRef, ValueDescriptor,
};

fn int() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::Int)
}

/// Registry with the fixture qualifier types
///
/// - `q.Range { from: int = 0, to: int }`
/// - `q.NonNull`, `q.Nullable`: markers
/// - `q.Unit { value: String = "m" }`
/// - `q.Sequence { value: int[] }`
/// - `q.Policy { level: q.Level, target: Class, inner: q.Range, tags: String[] = {} }`
pub fn fixture_registry() -> DeclarationRegistry {
    DeclarationRegistry::new()
        .with(
            QualifierDeclaration::new("q.Range")
                .element_with_default("from", int(), ValueDescriptor::Int(0))
                .element("to", int()),
        )
        .with(QualifierDeclaration::new("q.NonNull"))
        .with(QualifierDeclaration::new("q.Nullable"))
        .with(QualifierDeclaration::new("q.Unit").element_with_default(
            "value",
            TypeRef::string(),
            ValueDescriptor::string("m"),
        ))
        .with(QualifierDeclaration::new("q.Sequence").element("value", TypeRef::array_of(int())))
        .with(
            QualifierDeclaration::new("q.Policy")
                .element("level", TypeRef::enumeration("q.Level"))
                .element("target", TypeRef::class_literal())
                .element("inner", TypeRef::annotation("q.Range"))
                .element_with_default(
                    "tags",
                    TypeRef::array_of(TypeRef::string()),
                    ValueDescriptor::List(Vec::new()),
                ),
        )
}

/// `@q.Range(to=..)`, or `@q.Range(from=.., to=..)` when `from` is given
pub fn fixture_range(registry: &DeclarationRegistry, from: Option<i32>, to: i32) -> QualifierKey {
    let mut builder = QualifierBuilder::create(registry, "q.Range").unwrap();
    if let Some(from) = from {
        builder.assign("from", from).unwrap();
    }
    builder.assign("to", to).unwrap();
    builder.build().unwrap()
}

pub fn fixture_sequence(registry: &DeclarationRegistry, values: &[i32]) -> QualifierKey {
    let mut builder = QualifierBuilder::create(registry, "q.Sequence").unwrap();
    builder.set_list("value", values.iter().copied()).unwrap();
    builder.build().unwrap()
}

pub fn fixture_marker(registry: &DeclarationRegistry, type_name: &str) -> QualifierKey {
    QualifierBuilder::create(registry, type_name)
        .unwrap()
        .build()
        .unwrap()
}

pub fn fixture_policy(registry: &DeclarationRegistry, level: &str, tags: &[&str]) -> QualifierKey {
    let inner = fixture_range(registry, None, 10);
    let mut builder = QualifierBuilder::create(registry, "q.Policy").unwrap();
    builder
        .assign("level", HostValue::enum_constant("q.Level", level))
        .unwrap()
        .assign("target", TypeRef::string())
        .unwrap()
        .assign("inner", inner)
        .unwrap()
        .set_list("tags", tags.iter().copied())
        .unwrap();
    builder.build().unwrap()
}
