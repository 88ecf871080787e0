use super::type_::Type;
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct List {
    element: Arc<Type>,
}

impl List {
    pub fn new(element: impl Into<Type>) -> Self {
        Self::with_shared(element.into().into())
    }

    pub(crate) fn with_shared(element: Arc<Type>) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Type {
        &self.element
    }

    pub fn to_id(&self) -> String {
        format!("list<{}>", self.element.to_id())
    }
}
