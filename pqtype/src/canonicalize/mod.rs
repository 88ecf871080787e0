mod type_canonicalizer;
mod type_equality_checker;

use crate::configuration::{CanonicalizeConfiguration, DEFAULT_CANONICALIZE_CONFIGURATION};
use crate::error::TypeError;
use crate::source::{SourceSchema, SourceType};
use crate::types::{Schema, Type};
use std::sync::Arc;
use type_canonicalizer::TypeCanonicalizer;
use type_equality_checker::TypeEqualityChecker;

/// Rewrites a type of any representation into its canonical form.
///
/// Children are canonicalized before their parents, field order and
/// nullability are kept, and every primitive leaf becomes the shared canonical
/// instance. A dictionary whose index type is not fixed-width is an error.
pub fn canonicalize(type_: &dyn SourceType) -> Result<Type, TypeError> {
    canonicalize_with(type_, &DEFAULT_CANONICALIZE_CONFIGURATION)
}

pub fn canonicalize_with(
    type_: &dyn SourceType,
    configuration: &CanonicalizeConfiguration,
) -> Result<Type, TypeError> {
    Ok(unwrap_shared(
        TypeCanonicalizer::new(configuration).canonicalize(type_)?,
    ))
}

pub fn canonicalize_schema(schema: &dyn SourceSchema) -> Result<Schema, TypeError> {
    canonicalize_schema_with(schema, &DEFAULT_CANONICALIZE_CONFIGURATION)
}

pub fn canonicalize_schema_with(
    schema: &dyn SourceSchema,
    configuration: &CanonicalizeConfiguration,
) -> Result<Schema, TypeError> {
    TypeCanonicalizer::new(configuration).canonicalize_schema(schema)
}

/// Checks if two types of any representations denote the same type.
///
/// Errors from canonicalizing either side are returned rather than treated as
/// inequality.
pub fn types_equal(one: &dyn SourceType, other: &dyn SourceType) -> Result<bool, TypeError> {
    types_equal_with(one, other, &DEFAULT_CANONICALIZE_CONFIGURATION)
}

pub fn types_equal_with(
    one: &dyn SourceType,
    other: &dyn SourceType,
    configuration: &CanonicalizeConfiguration,
) -> Result<bool, TypeError> {
    let canonicalizer = TypeCanonicalizer::new(configuration);

    Ok(TypeEqualityChecker::new().equal(
        &*canonicalizer.canonicalize(one)?,
        &*canonicalizer.canonicalize(other)?,
    ))
}

pub fn schemas_equal(one: &dyn SourceSchema, other: &dyn SourceSchema) -> Result<bool, TypeError> {
    schemas_equal_with(one, other, &DEFAULT_CANONICALIZE_CONFIGURATION)
}

pub fn schemas_equal_with(
    one: &dyn SourceSchema,
    other: &dyn SourceSchema,
    configuration: &CanonicalizeConfiguration,
) -> Result<bool, TypeError> {
    let canonicalizer = TypeCanonicalizer::new(configuration);

    Ok(TypeEqualityChecker::new().equal_schemas(
        &canonicalizer.canonicalize_schema(one)?,
        &canonicalizer.canonicalize_schema(other)?,
    ))
}

fn unwrap_shared(type_: Arc<Type>) -> Type {
    Arc::try_unwrap(type_).unwrap_or_else(|type_| type_.as_ref().clone())
}
