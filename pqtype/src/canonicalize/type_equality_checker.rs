use crate::types::*;

pub struct TypeEqualityChecker {}

impl TypeEqualityChecker {
    pub fn new() -> Self {
        Self {}
    }

    pub fn equal(&self, one: &Type, other: &Type) -> bool {
        // Canonical primitive leaves are shared.
        if std::ptr::eq(one, other) {
            return true;
        }

        match (one, other) {
            (Type::Dictionary(one), Type::Dictionary(other)) => {
                self.equal(one.index(), other.index()) && self.equal(one.value(), other.value())
            }
            (Type::List(one), Type::List(other)) => self.equal(one.element(), other.element()),
            (Type::Map(one), Type::Map(other)) => {
                self.equal(one.key(), other.key()) && self.equal(one.value(), other.value())
            }
            (Type::Opaque(one), Type::Opaque(other)) => one == other,
            (Type::Primitive(one), Type::Primitive(other)) => one == other,
            (Type::Struct(one), Type::Struct(other)) => {
                self.equal_fields(one.fields(), other.fields())
            }
            (_, _) => false,
        }
    }

    pub fn equal_schemas(&self, one: &Schema, other: &Schema) -> bool {
        self.equal_fields(one.fields(), other.fields())
    }

    fn equal_fields(&self, one: &[Field], other: &[Field]) -> bool {
        one.len() == other.len()
            && one.iter().zip(other).all(|(one, other)| {
                one.name() == other.name()
                    && one.is_nullable() == other.is_nullable()
                    && self.equal(one.type_(), other.type_())
            })
    }
}
