//! Field-oriented schema representation.

mod data_type;
mod field;
mod schema;

pub use data_type::DataType;
pub use field::Field;
pub use schema::Schema;
