use super::date_unit::DateUnit;
use super::field::Field;
use crate::opaque_types;
use crate::time_unit::TimeUnit;
use pqtype::types::Primitive;
use pqtype::{SourceField, SourceNode, SourceType};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DataType {
    Null,
    Bool,
    Integer {
        bits: u8,
        signed: bool,
    },
    Floating {
        bits: u8,
    },
    Text {
        large: bool,
    },
    Bytes {
        large: bool,
    },
    FixedBytes {
        size: usize,
    },
    Date {
        unit: DateUnit,
    },
    Timestamp {
        unit: TimeUnit,
        zone: Option<String>,
    },
    Decimal {
        precision: u8,
        scale: i8,
    },
    List {
        element: Arc<DataType>,
        element_nullable: bool,
    },
    Struct {
        fields: Vec<Field>,
    },
    Map {
        key: Arc<DataType>,
        item: Arc<DataType>,
        keys_sorted: bool,
    },
    Dictionary {
        index: Arc<DataType>,
        value: Arc<DataType>,
        ordered: bool,
    },
}

impl DataType {
    pub fn boolean() -> Self {
        Self::Bool
    }

    pub fn int32() -> Self {
        Self::Integer {
            bits: 32,
            signed: true,
        }
    }

    pub fn int64() -> Self {
        Self::Integer {
            bits: 64,
            signed: true,
        }
    }

    pub fn float64() -> Self {
        Self::Floating { bits: 64 }
    }

    pub fn utf8() -> Self {
        Self::Text { large: false }
    }

    pub fn binary() -> Self {
        Self::Bytes { large: false }
    }

    pub fn list_of(element: DataType) -> Self {
        Self::List {
            element: element.into(),
            element_nullable: true,
        }
    }

    pub fn struct_of(fields: Vec<Field>) -> Self {
        Self::Struct { fields }
    }

    pub fn map_of(key: DataType, item: DataType) -> Self {
        Self::Map {
            key: key.into(),
            item: item.into(),
            keys_sorted: false,
        }
    }

    pub fn dictionary_of(index: DataType, value: DataType) -> Self {
        Self::Dictionary {
            index: index.into(),
            value: value.into(),
            ordered: false,
        }
    }

    fn integer_node(bits: u8, signed: bool) -> SourceNode<'static> {
        match (bits, signed) {
            (32, true) => SourceNode::Primitive(Primitive::Int32),
            (64, true) => SourceNode::Primitive(Primitive::Int64),
            _ => SourceNode::Other(opaque_types::integer(bits, signed)),
        }
    }
}

impl SourceType for DataType {
    fn node(&self) -> SourceNode<'_> {
        match self {
            Self::Bool => SourceNode::Primitive(Primitive::Boolean),
            Self::Integer { bits, signed } => Self::integer_node(*bits, *signed),
            Self::Floating { bits: 64 } => SourceNode::Primitive(Primitive::Float64),
            Self::Floating { bits } => SourceNode::Other(opaque_types::floating(*bits)),
            Self::Text { large: false } => SourceNode::Primitive(Primitive::String),
            Self::Text { large: true } => SourceNode::Other(opaque_types::large_utf8()),
            Self::Bytes { large: false } => SourceNode::Primitive(Primitive::Binary),
            Self::Bytes { large: true } => SourceNode::Other(opaque_types::large_binary()),
            Self::List { element, .. } => SourceNode::List(&**element),
            Self::Struct { fields } => SourceNode::Struct(
                fields
                    .iter()
                    .map(|field| SourceField::new(field.name(), field.type_(), field.is_nullable()))
                    .collect(),
            ),
            Self::Map { key, item, .. } => SourceNode::Map(&**key, &**item),
            Self::Dictionary { index, value, .. } => {
                SourceNode::Dictionary(&**index, &**value)
            }
            Self::Null => SourceNode::Other(opaque_types::null()),
            Self::FixedBytes { size } => SourceNode::Other(opaque_types::fixed_size_binary(*size)),
            Self::Date {
                unit: DateUnit::Day,
            } => SourceNode::Other(opaque_types::date32()),
            Self::Date {
                unit: DateUnit::Millisecond,
            } => SourceNode::Other(opaque_types::date64()),
            Self::Timestamp { unit, zone } => {
                SourceNode::Other(opaque_types::timestamp(*unit, zone.as_deref()))
            }
            Self::Decimal { precision, scale } => {
                SourceNode::Other(opaque_types::decimal128(*precision, *scale))
            }
        }
    }
}
