use super::field::Field;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Struct {
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn to_id(&self) -> String {
        format!(
            "struct<{}>",
            self.fields
                .iter()
                .map(|field| field.to_id())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
