/// Type that the canonical model does not describe structurally.
///
/// It is identified by the host type system's identifier for the original
/// type, and two opaque types are equal exactly when their identifiers and
/// declared widths are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Opaque {
    id: String,
    bit_width: Option<usize>,
}

impl Opaque {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bit_width: None,
        }
    }

    pub fn fixed_width(id: impl Into<String>, bit_width: usize) -> Self {
        Self {
            id: id.into(),
            bit_width: Some(bit_width),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_fixed_width(&self) -> bool {
        self.bit_width.is_some()
    }

    pub fn to_id(&self) -> String {
        self.id.clone()
    }
}
