use super::type_::Type;
use std::sync::Arc;

/// Dictionary-encoded type.
///
/// Construction does not check the index type. Canonicalization does, and
/// rejects any index type that is not fixed-width.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dictionary {
    index: Arc<Type>,
    value: Arc<Type>,
}

impl Dictionary {
    pub fn new(index: impl Into<Type>, value: impl Into<Type>) -> Self {
        Self::with_shared(index.into().into(), value.into().into())
    }

    pub(crate) fn with_shared(index: Arc<Type>, value: Arc<Type>) -> Self {
        Self { index, value }
    }

    pub fn index(&self) -> &Type {
        &self.index
    }

    pub fn value(&self) -> &Type {
        &self.value
    }

    pub fn to_id(&self) -> String {
        format!(
            "dictionary<values={}, indices={}>",
            self.value.to_id(),
            self.index.to_id()
        )
    }
}
