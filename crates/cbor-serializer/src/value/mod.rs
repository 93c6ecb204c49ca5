//! Value primitives.
//!
//! Every function here produces exactly one complete CBOR data item as a
//! fresh [`CborValue`]. Integers go through [`number`] (narrowest width) or
//! one of the explicit-width encoders, which clamp out-of-range requests to
//! the nearest representable value instead of failing:
//!
//! ```
//! use cbor_serializer::value;
//!
//! assert_eq!(value::u8(300).unwrap(), value::u8(255).unwrap());
//! assert_eq!(value::number(-90).unwrap().to_string(), "3859");
//! assert_eq!(value::string("A").to_string(), "6141");
//! ```

mod container;
mod hex;
mod int;
mod text;

pub use container::{array, map, MapOrder};
pub use hex::{decrement_hex, i64_hex, u64_hex};
pub use int::{i16, i32, i64, i8, i_small, number, u16, u32, u64, u8, u_small, IntoCborNumber};
pub use text::{bytes, string, string_utf16};

pub(crate) use text::write_str;

use crate::constants::*;
use crate::types::CborValue;

/// Explicit extension width of an integer-like header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    pub(crate) fn minor(self) -> u8 {
        match self {
            Width::W8 => MINOR_INT8,
            Width::W16 => MINOR_INT16,
            Width::W32 => MINOR_INT32,
            Width::W64 => MINOR_INT64,
        }
    }

    pub(crate) fn max(self) -> u64 {
        match self {
            Width::W8 => u8::MAX as u64,
            Width::W16 => u16::MAX as u64,
            Width::W32 => u32::MAX as u64,
            Width::W64 => u64::MAX,
        }
    }

    /// Number of extension bytes following the initial byte.
    pub(crate) fn bytes(self) -> usize {
        match self {
            Width::W8 => 1,
            Width::W16 => 2,
            Width::W32 => 4,
            Width::W64 => 8,
        }
    }

    /// Narrowest width holding `n`, or `None` when it fits the initial byte.
    pub(crate) fn for_magnitude(n: u64) -> Option<Width> {
        if n <= MAX_SMALL as u64 {
            None
        } else if n <= 0xff {
            Some(Width::W8)
        } else if n <= 0xffff {
            Some(Width::W16)
        } else if n <= 0xffff_ffff {
            Some(Width::W32)
        } else {
            Some(Width::W64)
        }
    }
}

/// Writes a header with an explicit extension width. `n` must already fit.
pub(crate) fn write_fixed(out: &mut Vec<u8>, major: u8, width: Width, n: u64) {
    out.push(initial_byte(major, width.minor()));
    match width {
        Width::W8 => out.push(n as u8),
        Width::W16 => out.extend_from_slice(&(n as u16).to_be_bytes()),
        Width::W32 => out.extend_from_slice(&(n as u32).to_be_bytes()),
        Width::W64 => out.extend_from_slice(&n.to_be_bytes()),
    }
}

/// Writes a header (major type + length/value) using the narrowest width.
pub(crate) fn write_header(out: &mut Vec<u8>, major: u8, n: u64) {
    match Width::for_magnitude(n) {
        None => out.push(initial_byte(major, n as u8)),
        Some(width) => write_fixed(out, major, width, n),
    }
}

fn simple(minor: u8) -> CborValue {
    CborValue::from_vec(vec![initial_byte(MAJOR_TKN, minor)])
}

/// Encodes the boolean `true` (`f5`).
pub fn true_() -> CborValue {
    simple(MINOR_TRUE)
}

/// Encodes the boolean `false` (`f4`).
pub fn false_() -> CborValue {
    simple(MINOR_FALSE)
}

pub fn boolean(b: bool) -> CborValue {
    if b {
        true_()
    } else {
        false_()
    }
}

/// Encodes `null` (`f6`).
pub fn null() -> CborValue {
    simple(MINOR_NULL)
}

/// Encodes `undefined` (`f7`).
pub fn undefined() -> CborValue {
    simple(MINOR_UNDEFINED)
}

/// Encodes a single-precision float (`fa` + 4 bytes, big-endian).
pub fn single_float(f: f32) -> CborValue {
    let mut out = Vec::with_capacity(5);
    out.push(initial_byte(MAJOR_TKN, MINOR_FLOAT32));
    out.extend_from_slice(&f.to_be_bytes());
    CborValue::from_vec(out)
}

/// Encodes a double-precision float (`fb` + 8 bytes, big-endian).
///
/// The width is never narrowed automatically; use [`single_float`] when the
/// value is known to survive the conversion.
pub fn double_float(f: f64) -> CborValue {
    let mut out = Vec::with_capacity(9);
    out.push(initial_byte(MAJOR_TKN, MINOR_FLOAT64));
    out.extend_from_slice(&f.to_be_bytes());
    CborValue::from_vec(out)
}

/// Tags a value.
///
/// [`SELF_DESCRIBE_TAG`] is always emitted as the literal `d9 d9 f7`; every
/// other tag number uses the narrowest major-type-6 header.
pub fn tagged(tag: u64, value: &CborValue) -> CborValue {
    let mut out = Vec::with_capacity(9 + value.len());
    if tag == SELF_DESCRIBE_TAG {
        out.extend_from_slice(&SELF_DESCRIBE_PROLOGUE);
    } else {
        write_header(&mut out, MAJOR_TAG, tag);
    }
    out.extend_from_slice(value.as_bytes());
    CborValue::from_vec(out)
}

/// Wraps pre-encoded bytes, copying them.
///
/// Only pass bytes that already form one well-formed CBOR item, such as the
/// output of another primitive or a hand-built extension.
pub fn raw(bytes: &[u8]) -> CborValue {
    CborValue::from_vec(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_widths() {
        let cases: [(u64, &[u8]); 6] = [
            (0, &[0x80]),
            (23, &[0x97]),
            (24, &[0x98, 0x18]),
            (256, &[0x99, 0x01, 0x00]),
            (0x1_0000, &[0x9a, 0x00, 0x01, 0x00, 0x00]),
            (
                0x1_0000_0000,
                &[0x9b, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00],
            ),
        ];
        for (n, expected) in cases {
            let mut out = Vec::new();
            write_header(&mut out, MAJOR_ARR, n);
            assert_eq!(out, expected, "header for {n}");
        }
    }

    #[test]
    fn simple_values() {
        assert_eq!(false_().as_bytes(), &[0xf4]);
        assert_eq!(true_().as_bytes(), &[0xf5]);
        assert_eq!(null().as_bytes(), &[0xf6]);
        assert_eq!(undefined().as_bytes(), &[0xf7]);
        assert_eq!(boolean(true), true_());
        assert_eq!(boolean(false), false_());
    }

    #[test]
    fn floats_are_big_endian() {
        assert_eq!(single_float(1.5).to_string(), "fa3fc00000");
        assert_eq!(double_float(1.1).to_string(), "fb3ff199999999999a");
        assert_eq!(double_float(-4.0).to_string(), "fbc010000000000000");
    }

    #[test]
    fn self_describe_tag_is_literal() {
        let v = string("A");
        assert_eq!(tagged(SELF_DESCRIBE_TAG, &v).to_string(), "d9d9f76141");
    }

    #[test]
    fn generic_tags_use_minimal_width_and_keep_content() {
        let v = u_small(1).unwrap();
        assert_eq!(tagged(2, &v).to_string(), "c201");
        assert_eq!(tagged(32, &v).to_string(), "d82001");
        assert_eq!(tagged(0x1234, &v).to_string(), "d9123401");
        assert_eq!(tagged(0x1_0000, &v).to_string(), "da0001000001");
    }

    #[test]
    fn raw_copies_input() {
        let mut source = vec![0x01];
        let value = raw(&source);
        source[0] = 0x02;
        assert_eq!(value.as_bytes(), &[0x01]);
    }
}
