use super::field::Field;

/// Ordered top-level columns of a table.
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

    pub fn to_id(&self) -> String {
        format!(
            "schema<{}>",
            self.fields
                .iter()
                .map(|field| field.to_id())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
