use crate::{v1, v2, TimeUnit};
use pqtype::{canonicalize, types_equal};
use proptest::prelude::*;
use std::sync::Arc;

fn leaf_type() -> impl Strategy<Value = v1::DataType> {
    prop_oneof![
        prop::sample::select(vec![
            v1::DataType::Boolean,
            v1::DataType::Int32,
            v1::DataType::Int64,
            v1::DataType::Float64,
            v1::DataType::Binary,
            v1::DataType::Utf8,
            v1::DataType::Null,
            v1::DataType::Int8,
            v1::DataType::UInt64,
            v1::DataType::Float32,
            v1::DataType::LargeUtf8,
            v1::DataType::Date32,
        ]),
        (1usize..32).prop_map(v1::DataType::FixedSizeBinary),
        (1u8..38, 0i8..10)
            .prop_map(|(precision, scale)| v1::DataType::Decimal128(precision, scale)),
        any::<bool>().prop_map(|utc| v1::DataType::Timestamp(
            TimeUnit::Microsecond,
            if utc { Some("UTC".into()) } else { None }
        )),
    ]
}

fn index_type() -> impl Strategy<Value = v1::DataType> {
    prop_oneof![
        Just(v1::DataType::Int32),
        Just(v1::DataType::Int64),
        Just(v1::DataType::Int16),
        Just(v1::DataType::UInt32),
    ]
}

// Nests at most five levels deep.
fn data_type() -> impl Strategy<Value = v1::DataType> {
    leaf_type().prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            (inner.clone(), any::<bool>())
                .prop_map(|(element, nullable)| v1::DataType::new_list(element, nullable)),
            prop::collection::vec(("[a-z]{1,6}", inner.clone(), any::<bool>()), 0..4).prop_map(
                |fields| v1::DataType::Struct(
                    fields
                        .into_iter()
                        .map(|(name, type_, nullable)| v1::Field::new(name, type_, nullable))
                        .collect()
                )
            ),
            (inner.clone(), inner.clone())
                .prop_map(|(key, value)| v1::DataType::new_map(key, value)),
            (index_type(), inner).prop_map(|(index, value)| v1::DataType::Dictionary(
                Box::new(index),
                Box::new(value)
            )),
        ]
    })
}

fn related_types() -> impl Strategy<Value = (v1::DataType, v1::DataType)> {
    data_type().prop_flat_map(|type_| (Just(type_.clone()), prop_oneof![Just(type_), data_type()]))
}

fn to_v2(type_: &v1::DataType) -> v2::DataType {
    match type_ {
        v1::DataType::Null => v2::DataType::Null,
        v1::DataType::Boolean => v2::DataType::boolean(),
        v1::DataType::Int8 => integer(8, true),
        v1::DataType::Int16 => integer(16, true),
        v1::DataType::Int32 => v2::DataType::int32(),
        v1::DataType::Int64 => v2::DataType::int64(),
        v1::DataType::UInt8 => integer(8, false),
        v1::DataType::UInt16 => integer(16, false),
        v1::DataType::UInt32 => integer(32, false),
        v1::DataType::UInt64 => integer(64, false),
        v1::DataType::Float16 => v2::DataType::Floating { bits: 16 },
        v1::DataType::Float32 => v2::DataType::Floating { bits: 32 },
        v1::DataType::Float64 => v2::DataType::float64(),
        v1::DataType::Timestamp(unit, zone) => v2::DataType::Timestamp {
            unit: *unit,
            zone: zone.clone(),
        },
        v1::DataType::Date32 => v2::DataType::Date {
            unit: v2::DateUnit::Day,
        },
        v1::DataType::Date64 => v2::DataType::Date {
            unit: v2::DateUnit::Millisecond,
        },
        v1::DataType::Decimal128(precision, scale) => v2::DataType::Decimal {
            precision: *precision,
            scale: *scale,
        },
        v1::DataType::Binary => v2::DataType::binary(),
        v1::DataType::FixedSizeBinary(size) => v2::DataType::FixedBytes { size: *size },
        v1::DataType::LargeBinary => v2::DataType::Bytes { large: true },
        v1::DataType::Utf8 => v2::DataType::utf8(),
        v1::DataType::LargeUtf8 => v2::DataType::Text { large: true },
        v1::DataType::List(field) => v2::DataType::List {
            element: Arc::new(to_v2(field.data_type())),
            element_nullable: field.is_nullable(),
        },
        v1::DataType::Struct(fields) => v2::DataType::struct_of(
            fields
                .iter()
                .map(|field| {
                    if field.is_nullable() {
                        v2::Field::optional(field.name(), to_v2(field.data_type()))
                    } else {
                        v2::Field::required(field.name(), to_v2(field.data_type()))
                    }
                })
                .collect(),
        ),
        v1::DataType::Map(key, value, keys_sorted) => v2::DataType::Map {
            key: Arc::new(to_v2(key.data_type())),
            item: Arc::new(to_v2(value.data_type())),
            keys_sorted: *keys_sorted,
        },
        v1::DataType::Dictionary(index, value) => {
            v2::DataType::dictionary_of(to_v2(index), to_v2(value))
        }
    }
}

fn integer(bits: u8, signed: bool) -> v2::DataType {
    v2::DataType::Integer { bits, signed }
}

proptest! {
    #[test]
    fn canonicalize_idempotently(type_ in data_type()) {
        let canonical_type = canonicalize(&type_).unwrap();

        prop_assert_eq!(canonicalize(&canonical_type).unwrap(), canonical_type);
    }

    #[test]
    fn canonicalize_deterministically_across_versions(type_ in data_type()) {
        prop_assert_eq!(canonicalize(&type_), canonicalize(&to_v2(&type_)));
    }

    #[test]
    fn check_equality_reflexively(type_ in data_type()) {
        prop_assert_eq!(types_equal(&type_, &type_), Ok(true));
        prop_assert_eq!(types_equal(&type_, &to_v2(&type_)), Ok(true));
    }

    #[test]
    fn check_equality_symmetrically((one, other) in related_types()) {
        let other = to_v2(&other);

        prop_assert_eq!(types_equal(&one, &other), types_equal(&other, &one));
    }

    #[test]
    fn check_equality_transitively((one, other) in related_types()) {
        let middle = to_v2(&one);

        if types_equal(&one, &middle).unwrap() && types_equal(&middle, &other).unwrap() {
            prop_assert!(types_equal(&one, &other).unwrap());
        }
    }

    #[test]
    fn check_equality_by_canonical_forms((one, other) in related_types()) {
        prop_assert_eq!(
            types_equal(&one, &to_v2(&other)).unwrap(),
            canonicalize(&one).unwrap() == canonicalize(&other).unwrap()
        );
    }
}
