use super::field::Field;
use crate::opaque_types;
use crate::time_unit::TimeUnit;
use pqtype::types::Primitive;
use pqtype::{SourceField, SourceNode, SourceType};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DataType {
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float16,
    Float32,
    Float64,
    Timestamp(TimeUnit, Option<String>),
    Date32,
    Date64,
    Decimal128(u8, i8),
    Binary,
    FixedSizeBinary(usize),
    LargeBinary,
    Utf8,
    LargeUtf8,
    List(Box<Field>),
    Struct(Vec<Field>),
    /// Key field, value field and whether keys are sorted.
    Map(Box<Field>, Box<Field>, bool),
    /// Index type and value type.
    Dictionary(Box<DataType>, Box<DataType>),
}

impl DataType {
    pub fn new_list(element: DataType, nullable: bool) -> Self {
        Self::List(Box::new(Field::new("item", element, nullable)))
    }

    pub fn new_map(key: DataType, value: DataType) -> Self {
        Self::Map(
            Box::new(Field::new("key", key, false)),
            Box::new(Field::new("value", value, true)),
            false,
        )
    }
}

impl SourceType for DataType {
    fn node(&self) -> SourceNode<'_> {
        match self {
            Self::Boolean => SourceNode::Primitive(Primitive::Boolean),
            Self::Int32 => SourceNode::Primitive(Primitive::Int32),
            Self::Int64 => SourceNode::Primitive(Primitive::Int64),
            Self::Float64 => SourceNode::Primitive(Primitive::Float64),
            Self::Binary => SourceNode::Primitive(Primitive::Binary),
            Self::Utf8 => SourceNode::Primitive(Primitive::String),
            Self::List(field) => SourceNode::List(field.data_type()),
            Self::Struct(fields) => SourceNode::Struct(
                fields
                    .iter()
                    .map(|field| {
                        SourceField::new(field.name(), field.data_type(), field.is_nullable())
                    })
                    .collect(),
            ),
            Self::Map(key, value, _) => SourceNode::Map(key.data_type(), value.data_type()),
            Self::Dictionary(index, value) => SourceNode::Dictionary(&**index, &**value),
            Self::Null => SourceNode::Other(opaque_types::null()),
            Self::Int8 => SourceNode::Other(opaque_types::integer(8, true)),
            Self::Int16 => SourceNode::Other(opaque_types::integer(16, true)),
            Self::UInt8 => SourceNode::Other(opaque_types::integer(8, false)),
            Self::UInt16 => SourceNode::Other(opaque_types::integer(16, false)),
            Self::UInt32 => SourceNode::Other(opaque_types::integer(32, false)),
            Self::UInt64 => SourceNode::Other(opaque_types::integer(64, false)),
            Self::Float16 => SourceNode::Other(opaque_types::floating(16)),
            Self::Float32 => SourceNode::Other(opaque_types::floating(32)),
            Self::Timestamp(unit, zone) => {
                SourceNode::Other(opaque_types::timestamp(*unit, zone.as_deref()))
            }
            Self::Date32 => SourceNode::Other(opaque_types::date32()),
            Self::Date64 => SourceNode::Other(opaque_types::date64()),
            Self::Decimal128(precision, scale) => {
                SourceNode::Other(opaque_types::decimal128(*precision, *scale))
            }
            Self::FixedSizeBinary(size) => {
                SourceNode::Other(opaque_types::fixed_size_binary(*size))
            }
            Self::LargeBinary => SourceNode::Other(opaque_types::large_binary()),
            Self::LargeUtf8 => SourceNode::Other(opaque_types::large_utf8()),
        }
    }
}
