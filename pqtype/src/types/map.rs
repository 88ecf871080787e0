use super::type_::Type;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Map {
    key: Arc<Type>,
    value: Arc<Type>,
}

impl Map {
    pub fn new(key: impl Into<Type>, value: impl Into<Type>) -> Self {
        Self::with_shared(key.into().into(), value.into().into())
    }

    pub(crate) fn with_shared(key: Arc<Type>, value: Arc<Type>) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &Type {
        &self.key
    }

    pub fn value(&self) -> &Type {
        &self.value
    }

    pub fn to_id(&self) -> String {
        format!("map<{}, {}>", self.key.to_id(), self.value.to_id())
    }
}
