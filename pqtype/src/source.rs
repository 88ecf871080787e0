use crate::types::{Field, Opaque, Primitive, Schema, Type};

/// Type node of any schema representation that can be canonicalized.
pub trait SourceType {
    fn node(&self) -> SourceNode<'_>;
}

/// Schema of any representation whose columns can be canonicalized.
pub trait SourceSchema {
    fn fields(&self) -> Vec<SourceField<'_>>;
}

/// Shape of a source type node as seen by the canonicalizer.
///
/// Representations map each of their variants to exactly one of these.
/// Anything without a structural counterpart goes to `Other`, which is the
/// only fallback.
pub enum SourceNode<'a> {
    Dictionary(&'a dyn SourceType, &'a dyn SourceType),
    List(&'a dyn SourceType),
    Map(&'a dyn SourceType, &'a dyn SourceType),
    Other(Opaque),
    Primitive(Primitive),
    Struct(Vec<SourceField<'a>>),
}

pub struct SourceField<'a> {
    name: &'a str,
    type_: &'a dyn SourceType,
    nullable: bool,
}

impl<'a> SourceField<'a> {
    pub fn new(name: &'a str, type_: &'a dyn SourceType, nullable: bool) -> Self {
        Self {
            name,
            type_,
            nullable,
        }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn type_(&self) -> &'a dyn SourceType {
        self.type_
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl<'a> From<&'a Field> for SourceField<'a> {
    fn from(field: &'a Field) -> Self {
        Self::new(field.name(), field.type_(), field.is_nullable())
    }
}

impl SourceType for Type {
    fn node(&self) -> SourceNode<'_> {
        match self {
            Self::Dictionary(dictionary) => {
                SourceNode::Dictionary(dictionary.index(), dictionary.value())
            }
            Self::List(list) => SourceNode::List(list.element()),
            Self::Map(map) => SourceNode::Map(map.key(), map.value()),
            Self::Opaque(opaque) => SourceNode::Other(opaque.clone()),
            Self::Primitive(primitive) => SourceNode::Primitive(*primitive),
            Self::Struct(struct_) => {
                SourceNode::Struct(struct_.fields().iter().map(SourceField::from).collect())
            }
        }
    }
}

impl SourceSchema for Schema {
    fn fields(&self) -> Vec<SourceField<'_>> {
        Schema::fields(self).iter().map(SourceField::from).collect()
    }
}
