//! Identifiers for types that only exist as `Opaque` in canonical form.
//!
//! Every representation builds them here so that the same logical type gets
//! the same identifier whichever version it comes from.

use crate::time_unit::TimeUnit;
use pqtype::types::Opaque;

pub fn null() -> Opaque {
    Opaque::new("null")
}

pub fn integer(bits: u8, signed: bool) -> Opaque {
    Opaque::fixed_width(
        format!("{}int{}", if signed { "" } else { "u" }, bits),
        bits.into(),
    )
}

pub fn floating(bits: u8) -> Opaque {
    Opaque::fixed_width(format!("float{}", bits), bits.into())
}

pub fn large_utf8() -> Opaque {
    Opaque::new("large_utf8")
}

pub fn large_binary() -> Opaque {
    Opaque::new("large_binary")
}

// Widths whose bit count does not fit in `usize` are treated as variable.
pub fn fixed_size_binary(size: usize) -> Opaque {
    let id = format!("fixed_size_binary[{}]", size);

    match size.checked_mul(8) {
        Some(bit_width) => Opaque::fixed_width(id, bit_width),
        None => Opaque::new(id),
    }
}

pub fn date32() -> Opaque {
    Opaque::fixed_width("date32", 32)
}

pub fn date64() -> Opaque {
    Opaque::fixed_width("date64", 64)
}

pub fn timestamp(unit: TimeUnit, zone: Option<&str>) -> Opaque {
    Opaque::fixed_width(
        match zone {
            Some(zone) => format!("timestamp[{}, tz={}]", unit.to_id(), zone),
            None => format!("timestamp[{}]", unit.to_id()),
        },
        64,
    )
}

pub fn decimal128(precision: u8, scale: i8) -> Opaque {
    Opaque::fixed_width(format!("decimal128({}, {})", precision, scale), 128)
}
