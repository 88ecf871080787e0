use super::dictionary::Dictionary;
use super::list::List;
use super::map::Map;
use super::opaque::Opaque;
use super::primitive::Primitive;
use super::struct_::Struct;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Type {
    Dictionary(Dictionary),
    List(List),
    Map(Map),
    Opaque(Opaque),
    Primitive(Primitive),
    Struct(Struct),
}

impl Type {
    pub fn to_id(&self) -> String {
        match self {
            Self::Dictionary(dictionary) => dictionary.to_id(),
            Self::List(list) => list.to_id(),
            Self::Map(map) => map.to_id(),
            Self::Opaque(opaque) => opaque.to_id(),
            Self::Primitive(primitive) => primitive.to_id(),
            Self::Struct(struct_) => struct_.to_id(),
        }
    }

    /// Returns `true` if values of this type have a static bit width, which
    /// dictionary indices require.
    pub fn is_fixed_width(&self) -> bool {
        match self {
            Self::Opaque(opaque) => opaque.is_fixed_width(),
            Self::Primitive(primitive) => primitive.is_fixed_width(),
            Self::Dictionary(_) | Self::List(_) | Self::Map(_) | Self::Struct(_) => false,
        }
    }

    pub fn into_struct(self) -> Option<Struct> {
        match self {
            Self::Struct(struct_) => Some(struct_),
            _ => None,
        }
    }
}

impl From<Dictionary> for Type {
    fn from(dictionary: Dictionary) -> Self {
        Self::Dictionary(dictionary)
    }
}

impl From<List> for Type {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Map> for Type {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Opaque> for Type {
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Struct> for Type {
    fn from(struct_: Struct) -> Self {
        Self::Struct(struct_)
    }
}
