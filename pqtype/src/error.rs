use crate::types::{Opaque, Type};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeError {
    NonFixedWidthDictionaryIndex(Type),
    UnsupportedType(Opaque),
}

impl Display for TypeError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::NonFixedWidthDictionaryIndex(type_) => write!(
                formatter,
                "dictionary index type {} is not fixed-width",
                type_.to_id()
            ),
            Self::UnsupportedType(opaque) => {
                write!(formatter, "unsupported type {}", opaque.id())
            }
        }
    }
}

impl Error for TypeError {}
