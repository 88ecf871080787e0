#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Primitive {
    Binary,
    Boolean,
    Float64,
    Int32,
    Int64,
    String,
}

impl Primitive {
    /// All primitives in declaration order.
    pub const ALL: [Primitive; 6] = [
        Self::Binary,
        Self::Boolean,
        Self::Float64,
        Self::Int32,
        Self::Int64,
        Self::String,
    ];

    /// Width of a value in bits, or `None` for variable-width primitives.
    pub fn bit_width(&self) -> Option<usize> {
        match self {
            Self::Binary | Self::String => None,
            Self::Boolean => Some(1),
            Self::Int32 => Some(32),
            Self::Float64 | Self::Int64 => Some(64),
        }
    }

    pub fn is_fixed_width(&self) -> bool {
        self.bit_width().is_some()
    }

    pub fn to_id(&self) -> String {
        match self {
            Self::Binary => "binary",
            Self::Boolean => "bool",
            Self::Float64 => "float64",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "utf8",
        }
        .into()
    }
}
