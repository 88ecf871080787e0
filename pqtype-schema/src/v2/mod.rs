//! Kind-oriented schema representation with shared children.

mod data_type;
mod date_unit;
mod field;
mod schema;

pub use data_type::DataType;
pub use date_unit::DateUnit;
pub use field::Field;
pub use schema::Schema;
