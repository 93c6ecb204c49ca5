//! Exact 64-bit entry points taking hex digits.

use super::{u64, write_fixed, Width};
use crate::constants::*;
use crate::error::CborError;
use crate::types::CborValue;

fn validate_hex(digits: &str) -> Result<(), CborError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CborError::InvalidNumber);
    }
    Ok(())
}

fn fixed64(major: u8, n: u64) -> CborValue {
    let mut out = Vec::with_capacity(9);
    write_fixed(&mut out, major, Width::W64, n);
    CborValue::from_vec(out)
}

/// Subtracts one from a hex magnitude, digit by digit.
///
/// The borrow starts at the least-significant digit: each `0` becomes `f`
/// and the first non-zero digit is decremented, leaving the digits above it
/// untouched. The result keeps the input width. Returns `Ok(None)` when
/// every digit is zero, since the result would underflow.
///
/// ```
/// use cbor_serializer::value::decrement_hex;
///
/// assert_eq!(decrement_hex("0123456000000000").unwrap().as_deref(), Some("0123455fffffffff"));
/// assert_eq!(decrement_hex("0000").unwrap(), None);
/// ```
pub fn decrement_hex(digits: &str) -> Result<Option<String>, CborError> {
    validate_hex(digits)?;
    let mut out = digits.as_bytes().to_vec();
    for slot in out.iter_mut().rev() {
        if *slot == b'0' {
            *slot = b'f';
            continue;
        }
        let digit = (*slot as char).to_digit(16).ok_or(CborError::InvalidNumber)?;
        *slot = char::from_digit(digit - 1, 16).ok_or(CborError::InvalidNumber)? as u8;
        return Ok(Some(out.into_iter().map(char::from).collect()));
    }
    Ok(None)
}

/// Encodes an unsigned magnitude given as hex digits, with an 8-byte
/// extension. Leading zeros are allowed; magnitudes above `u64::MAX` clamp.
pub fn u64_hex(digits: &str) -> Result<CborValue, CborError> {
    validate_hex(digits)?;
    let significant = digits.trim_start_matches('0');
    if significant.len() > 16 {
        return Ok(fixed64(MAJOR_UIN, u64::MAX));
    }
    let n = if significant.is_empty() {
        0
    } else {
        u64::from_str_radix(significant, 16).map_err(|_| CborError::InvalidNumber)?
    };
    Ok(fixed64(MAJOR_UIN, n))
}

/// Encodes a negative integer given as `-` followed by up to 16 hex digits
/// of its magnitude, with an 8-byte extension.
///
/// The `-n - 1` transform is done with [`decrement_hex`], so every 64-bit
/// magnitude is exact. Input without a leading `-` clamps to zero and
/// yields the 8-byte unsigned zero, as does a magnitude of zero.
pub fn i64_hex(digits: &str) -> Result<CborValue, CborError> {
    let (negative, magnitude) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };
    validate_hex(magnitude)?;
    if magnitude.len() > 16 {
        return Err(CborError::InvalidNumber);
    }
    if !negative {
        return u64(0);
    }
    match decrement_hex(magnitude)? {
        None => u64(0),
        Some(decremented) => {
            let n = u64::from_str_radix(&decremented, 16).map_err(|_| CborError::InvalidNumber)?;
            Ok(fixed64(MAJOR_NIN, n))
        }
    }
}
