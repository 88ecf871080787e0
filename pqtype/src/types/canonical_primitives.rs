use super::primitive::Primitive;
use super::type_::Type;
use lazy_static::lazy_static;
use std::sync::Arc;

lazy_static! {
    static ref CANONICAL_PRIMITIVES: Vec<Arc<Type>> = Primitive::ALL
        .iter()
        .map(|primitive| Arc::new(Type::Primitive(*primitive)))
        .collect();
}

/// Returns the process-wide canonical instance of a primitive type.
///
/// Every call for the same primitive returns a handle to the same allocation,
/// so canonical trees share their leaves.
pub fn canonical_primitive(primitive: Primitive) -> Arc<Type> {
    CANONICAL_PRIMITIVES[primitive as usize].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_up_primitive() {
        for primitive in &Primitive::ALL {
            assert_eq!(
                canonical_primitive(*primitive).as_ref(),
                &Type::Primitive(*primitive)
            );
        }
    }

    #[test]
    fn share_instances() {
        assert!(Arc::ptr_eq(
            &canonical_primitive(Primitive::Int64),
            &canonical_primitive(Primitive::Int64)
        ));
        assert!(!Arc::ptr_eq(
            &canonical_primitive(Primitive::Int64),
            &canonical_primitive(Primitive::Int32)
        ));
    }
}
