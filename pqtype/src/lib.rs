mod canonicalize;
mod configuration;
mod error;
mod source;
pub mod types;

pub use canonicalize::{
    canonicalize, canonicalize_schema, canonicalize_schema_with, canonicalize_with,
    schemas_equal, schemas_equal_with, types_equal, types_equal_with,
};
pub use configuration::{
    CanonicalizeConfiguration, OpaquePolicy, DEFAULT_CANONICALIZE_CONFIGURATION,
};
pub use error::TypeError;
pub use source::{SourceField, SourceNode, SourceSchema, SourceType};
