//! Columnar schema representations that `pqtype` canonicalizes.
//!
//! `v1` and `v2` describe the same logical types through unrelated APIs.
//! Both implement `pqtype::SourceType` and `pqtype::SourceSchema`, so types
//! from either can be canonicalized and compared with each other.

mod opaque_types;
#[cfg(test)]
mod properties;
mod time_unit;
pub mod v1;
pub mod v2;

pub use time_unit::TimeUnit;
