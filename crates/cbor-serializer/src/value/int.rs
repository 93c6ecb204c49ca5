//! Integer primitives: the small form, four explicit widths per sign, and
//! the minimal-width dispatcher.

use std::num::IntErrorKind;

use super::{write_fixed, Width};
use crate::constants::*;
use crate::error::CborError;
use crate::types::CborValue;

/// Numeric input accepted by the integer primitives.
///
/// Everything lands in an `i128`, wide enough for every magnitude CBOR can
/// carry in either sign. Rust integers convert exactly. Floats are truncated
/// toward zero (NaN is rejected, infinities saturate). Strings are parsed as
/// decimal, and `(text, radix)` pairs in the given radix; out-of-range text
/// saturates like any other oversized input.
pub trait IntoCborNumber {
    fn into_cbor_number(self) -> Result<i128, CborError>;
}

macro_rules! impl_exact_number {
    ($($ty:ty),*) => {
        $(
            impl IntoCborNumber for $ty {
                #[inline]
                fn into_cbor_number(self) -> Result<i128, CborError> {
                    Ok(self as i128)
                }
            }
        )*
    };
}

impl_exact_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl IntoCborNumber for u128 {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        Ok(i128::try_from(self).unwrap_or(i128::MAX))
    }
}

impl IntoCborNumber for f64 {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        if self.is_nan() {
            return Err(CborError::InvalidNumber);
        }
        Ok(self.trunc() as i128)
    }
}

impl IntoCborNumber for f32 {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        (self as f64).into_cbor_number()
    }
}

fn parse_radix(text: &str, radix: u32) -> Result<i128, CborError> {
    if !(2..=36).contains(&radix) {
        return Err(CborError::InvalidNumber);
    }
    match i128::from_str_radix(text.trim(), radix) {
        Ok(n) => Ok(n),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ => Err(CborError::InvalidNumber),
        },
    }
}

impl IntoCborNumber for &str {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        parse_radix(self, 10)
    }
}

impl IntoCborNumber for &String {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        parse_radix(self, 10)
    }
}

impl IntoCborNumber for (&str, u32) {
    fn into_cbor_number(self) -> Result<i128, CborError> {
        parse_radix(self.0, self.1)
    }
}

fn fixed(major: u8, width: Width, n: i128) -> CborValue {
    let n = n.clamp(0, width.max() as i128) as u64;
    let mut out = Vec::with_capacity(9);
    write_fixed(&mut out, major, width, n);
    CborValue::from_vec(out)
}

/// Magnitude written for a negative integer: `-n - 1`. Never overflows in
/// `i128`; non-negative `n` gives a negative result that callers clamp to 0.
#[inline]
fn negative_magnitude(n: i128) -> i128 {
    -1 - n
}

/// Encodes a number in `[0, 23]` directly in the initial byte.
pub fn u_small(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    let n = n.into_cbor_number()?.clamp(0, MAX_SMALL as i128) as u8;
    Ok(CborValue::from_vec(vec![initial_byte(MAJOR_UIN, n)]))
}

/// Encodes a number in `[0, 255]` with a 1-byte extension.
pub fn u8(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_UIN, Width::W8, n.into_cbor_number()?))
}

/// Encodes a number in `[0, 65535]` with a 2-byte extension.
pub fn u16(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_UIN, Width::W16, n.into_cbor_number()?))
}

/// Encodes a number in `[0, 2^32 - 1]` with a 4-byte extension.
pub fn u32(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_UIN, Width::W32, n.into_cbor_number()?))
}

/// Encodes a number in `[0, 2^64 - 1]` with an 8-byte extension.
///
/// See [`super::u64_hex`] for exact input as hex digits.
pub fn u64(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_UIN, Width::W64, n.into_cbor_number()?))
}

/// Encodes a negative number in `[-24, -1]` directly in the initial byte.
///
/// Zero encodes as the unsigned small zero, since CBOR has no negative zero.
pub fn i_small(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    let n = n.into_cbor_number()?;
    if n == 0 {
        return u_small(0);
    }
    let magnitude = negative_magnitude(n).clamp(0, MAX_SMALL as i128) as u8;
    Ok(CborValue::from_vec(vec![initial_byte(MAJOR_NIN, magnitude)]))
}

/// Encodes a negative number in `[-256, -1]` with a 1-byte extension.
pub fn i8(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_NIN, Width::W8, negative_magnitude(n.into_cbor_number()?)))
}

/// Encodes a negative number in `[-65536, -1]` with a 2-byte extension.
pub fn i16(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_NIN, Width::W16, negative_magnitude(n.into_cbor_number()?)))
}

/// Encodes a negative number in `[-2^32, -1]` with a 4-byte extension.
pub fn i32(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_NIN, Width::W32, negative_magnitude(n.into_cbor_number()?)))
}

/// Encodes a negative number in `[-2^64, -1]` with an 8-byte extension.
///
/// See [`super::i64_hex`] for exact input as hex digits.
pub fn i64(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    Ok(fixed(MAJOR_NIN, Width::W64, negative_magnitude(n.into_cbor_number()?)))
}

/// Encodes a number using the narrowest form that holds it exactly.
///
/// Magnitudes beyond 64 bits clamp through [`u64`] / [`i64`].
pub fn number(n: impl IntoCborNumber) -> Result<CborValue, CborError> {
    let n = n.into_cbor_number()?;
    if n >= 0 {
        match n {
            0..=0x17 => u_small(n),
            0x18..=0xff => u8(n),
            0x100..=0xffff => u16(n),
            0x1_0000..=0xffff_ffff => u32(n),
            _ => u64(n),
        }
    } else {
        match negative_magnitude(n) {
            0..=0x17 => i_small(n),
            0x18..=0xff => i8(n),
            0x100..=0xffff => i16(n),
            0x1_0000..=0xffff_ffff => i32(n),
            _ => i64(n),
        }
    }
}
