use super::field::Field;
use pqtype::{SourceField, SourceSchema};

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}

impl SourceSchema for Schema {
    fn fields(&self) -> Vec<SourceField<'_>> {
        Schema::fields(self)
            .iter()
            .map(|field| SourceField::new(field.name(), field.type_(), field.is_nullable()))
            .collect()
    }
}
