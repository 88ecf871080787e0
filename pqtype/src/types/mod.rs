mod canonical_primitives;
mod dictionary;
mod field;
mod list;
mod map;
mod opaque;
mod primitive;
mod schema;
mod struct_;
mod type_;

pub use canonical_primitives::canonical_primitive;
pub use dictionary::*;
pub use field::*;
pub use list::*;
pub use map::*;
pub use opaque::*;
pub use primitive::*;
pub use schema::*;
pub use struct_::*;
pub use type_::*;
