use super::type_::Type;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    name: String,
    type_: Arc<Type>,
    nullable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, type_: impl Into<Type>, nullable: bool) -> Self {
        Self::with_shared(name.into(), type_.into().into(), nullable)
    }

    pub(crate) fn with_shared(name: String, type_: Arc<Type>, nullable: bool) -> Self {
        Self {
            name,
            type_,
            nullable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_(&self) -> &Type {
        &self.type_
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn to_id(&self) -> String {
        format!(
            "{}: {}{}",
            self.name,
            self.type_.to_id(),
            if self.nullable { "?" } else { "" }
        )
    }
}
