use crate::configuration::{CanonicalizeConfiguration, OpaquePolicy};
use crate::error::TypeError;
use crate::source::{SourceField, SourceNode, SourceSchema, SourceType};
use crate::types::{
    canonical_primitive, Dictionary, Field, List, Map, Opaque, Schema, Struct, Type,
};
use std::sync::Arc;

pub struct TypeCanonicalizer<'a> {
    configuration: &'a CanonicalizeConfiguration,
}

impl<'a> TypeCanonicalizer<'a> {
    pub fn new(configuration: &'a CanonicalizeConfiguration) -> Self {
        Self { configuration }
    }

    pub fn canonicalize(&self, type_: &dyn SourceType) -> Result<Arc<Type>, TypeError> {
        Ok(match type_.node() {
            SourceNode::Dictionary(index, value) => {
                let index = self.canonicalize(index)?;

                if !index.is_fixed_width() {
                    return Err(TypeError::NonFixedWidthDictionaryIndex(
                        index.as_ref().clone(),
                    ));
                }

                Arc::new(Dictionary::with_shared(index, self.canonicalize(value)?).into())
            }
            SourceNode::List(element) => {
                Arc::new(List::with_shared(self.canonicalize(element)?).into())
            }
            SourceNode::Map(key, value) => Arc::new(
                Map::with_shared(self.canonicalize(key)?, self.canonicalize(value)?).into(),
            ),
            SourceNode::Other(opaque) => Arc::new(self.canonicalize_opaque(opaque)?.into()),
            SourceNode::Primitive(primitive) => canonical_primitive(primitive),
            SourceNode::Struct(fields) => Arc::new(
                Struct::new(
                    fields
                        .iter()
                        .map(|field| self.canonicalize_field(field))
                        .collect::<Result<_, _>>()?,
                )
                .into(),
            ),
        })
    }

    pub fn canonicalize_schema(&self, schema: &dyn SourceSchema) -> Result<Schema, TypeError> {
        Ok(Schema::new(
            schema
                .fields()
                .iter()
                .map(|field| self.canonicalize_field(field))
                .collect::<Result<_, _>>()?,
        ))
    }

    fn canonicalize_field(&self, field: &SourceField) -> Result<Field, TypeError> {
        Ok(Field::with_shared(
            field.name().into(),
            self.canonicalize(field.type_())?,
            field.is_nullable(),
        ))
    }

    // Unmodeled types are assumed to mean the same thing in every
    // representation that reports the same identifier for them.
    fn canonicalize_opaque(&self, opaque: Opaque) -> Result<Opaque, TypeError> {
        match self.configuration.opaque_policy {
            OpaquePolicy::Allow => {
                log::debug!("passing through unmodeled type {}", opaque.id());

                Ok(opaque)
            }
            OpaquePolicy::Reject => Err(TypeError::UnsupportedType(opaque)),
        }
    }
}
