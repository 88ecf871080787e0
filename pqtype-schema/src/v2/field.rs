use super::data_type::DataType;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    name: String,
    type_: DataType,
    nullable: bool,
}

impl Field {
    pub fn required(name: impl Into<String>, type_: DataType) -> Self {
        Self {
            name: name.into(),
            type_,
            nullable: false,
        }
    }

    pub fn optional(name: impl Into<String>, type_: DataType) -> Self {
        Self {
            name: name.into(),
            type_,
            nullable: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_(&self) -> &DataType {
        &self.type_
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}
