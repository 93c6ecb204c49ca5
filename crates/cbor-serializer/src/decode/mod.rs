//! Integer decoders over a byte cursor.
//!
//! Each decoder inspects the next item and either consumes exactly its
//! bytes and returns [`Decoded::Value`], or returns [`Decoded::Unknown`]
//! without moving the cursor so the next candidate can try the same
//! position. An exhausted cursor, or a header whose extension bytes are
//! missing, fails with [`CborError::EmptyInput`], again without consuming.
//!
//! ```
//! use cbor_serializer::decode::{decode_u16, decode_u8, Decoded};
//! use cbor_serializer::Reader;
//!
//! let mut reader = Reader::new(&[0x19, 0x23, 0x28]);
//! assert_eq!(decode_u8(&mut reader).unwrap(), Decoded::Unknown);
//! assert_eq!(decode_u16(&mut reader).unwrap(), Decoded::Value(9000));
//! assert!(reader.is_empty());
//! ```

mod deserializer;

pub use deserializer::{CborDecoder, CborDeserializer, IntegerCborDecoder};

use cbor_serializer_buffers::Reader;

use crate::constants::*;
use crate::error::CborError;
use crate::value::Width;

/// Outcome of one decoder attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    Value(T),
    /// The next item is not this decoder's shape; nothing was consumed.
    Unknown,
}

impl<T> Decoded<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        match self {
            Decoded::Value(v) => Decoded::Value(f(v)),
            Decoded::Unknown => Decoded::Unknown,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Decoded::Value(v) => Some(v),
            Decoded::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Decoded::Unknown)
    }
}

pub type DecoderFunction<T> = fn(&mut Reader<'_>) -> Result<Decoded<T>, CborError>;

/// Unsigned decoders, narrowest first.
pub const UNSIGNED_DECODERS: [DecoderFunction<u64>; 5] =
    [decode_u_small, decode_u8, decode_u16, decode_u32, decode_u64];

/// Negative integer decoders, narrowest first.
pub const NEGATIVE_DECODERS: [DecoderFunction<i128>; 5] =
    [decode_i_small, decode_i8, decode_i16, decode_i32, decode_i64];

/// Reads the argument of a `major` item encoded with exactly `width`
/// (`None` for the small form).
fn read_argument(
    reader: &mut Reader<'_>,
    major: u8,
    width: Option<Width>,
) -> Result<Decoded<u64>, CborError> {
    let initial = reader.peek().ok_or(CborError::EmptyInput)?;
    let minor = initial & MINOR_MASK;
    if (initial & MAJOR_MASK) >> 5 != major {
        return Ok(Decoded::Unknown);
    }
    let Some(width) = width else {
        if minor > MAX_SMALL {
            return Ok(Decoded::Unknown);
        }
        reader.skip(1)?;
        return Ok(Decoded::Value(minor as u64));
    };
    if minor != width.minor() {
        return Ok(Decoded::Unknown);
    }
    reader.ensure(1 + width.bytes())?;
    reader.skip(1)?;
    let n = match width {
        Width::W8 => reader.u8()? as u64,
        Width::W16 => reader.u16()? as u64,
        Width::W32 => reader.u32()? as u64,
        Width::W64 => reader.u64()?,
    };
    Ok(Decoded::Value(n))
}

fn negative(magnitude: Decoded<u64>) -> Decoded<i128> {
    magnitude.map(|n| -1 - n as i128)
}

pub fn decode_u_small(reader: &mut Reader<'_>) -> Result<Decoded<u64>, CborError> {
    read_argument(reader, MAJOR_UIN, None)
}

pub fn decode_u8(reader: &mut Reader<'_>) -> Result<Decoded<u64>, CborError> {
    read_argument(reader, MAJOR_UIN, Some(Width::W8))
}

/// Decodes `19 hh ll` as the big-endian pair `hh ll`.
pub fn decode_u16(reader: &mut Reader<'_>) -> Result<Decoded<u64>, CborError> {
    read_argument(reader, MAJOR_UIN, Some(Width::W16))
}

pub fn decode_u32(reader: &mut Reader<'_>) -> Result<Decoded<u64>, CborError> {
    read_argument(reader, MAJOR_UIN, Some(Width::W32))
}

pub fn decode_u64(reader: &mut Reader<'_>) -> Result<Decoded<u64>, CborError> {
    read_argument(reader, MAJOR_UIN, Some(Width::W64))
}

pub fn decode_i_small(reader: &mut Reader<'_>) -> Result<Decoded<i128>, CborError> {
    read_argument(reader, MAJOR_NIN, None).map(negative)
}

pub fn decode_i8(reader: &mut Reader<'_>) -> Result<Decoded<i128>, CborError> {
    read_argument(reader, MAJOR_NIN, Some(Width::W8)).map(negative)
}

pub fn decode_i16(reader: &mut Reader<'_>) -> Result<Decoded<i128>, CborError> {
    read_argument(reader, MAJOR_NIN, Some(Width::W16)).map(negative)
}

pub fn decode_i32(reader: &mut Reader<'_>) -> Result<Decoded<i128>, CborError> {
    read_argument(reader, MAJOR_NIN, Some(Width::W32)).map(negative)
}

/// Decodes the full 64-bit negative range, down to `-2^64`.
pub fn decode_i64(reader: &mut Reader<'_>) -> Result<Decoded<i128>, CborError> {
    read_argument(reader, MAJOR_NIN, Some(Width::W64)).map(negative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_leaves_cursor_untouched() {
        let data = [0x18, 0x2a];
        let mut reader = Reader::new(&data);
        assert_eq!(decode_u_small(&mut reader), Ok(Decoded::Unknown));
        assert_eq!(decode_u16(&mut reader), Ok(Decoded::Unknown));
        assert_eq!(decode_i8(&mut reader), Ok(Decoded::Unknown));
        assert_eq!(reader.x, 0);
        assert_eq!(decode_u8(&mut reader), Ok(Decoded::Value(42)));
        assert_eq!(reader.x, 2);
    }

    #[test]
    fn empty_and_truncated_input() {
        let mut empty = Reader::new(&[]);
        assert_eq!(decode_u_small(&mut empty), Err(CborError::EmptyInput));
        let data = [0x1a, 0x00, 0x01];
        let mut truncated = Reader::new(&data);
        assert_eq!(decode_u32(&mut truncated), Err(CborError::EmptyInput));
        assert_eq!(truncated.x, 0);
    }

    #[test]
    fn negative_transform() {
        let cases: [(&[u8], i128); 5] = [
            (&[0x20], -1),
            (&[0x37], -24),
            (&[0x38, 0xff], -256),
            (&[0x39, 0x23, 0x27], -9000),
            (&[0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff], -(1i128 << 64)),
        ];
        for (bytes, expected) in cases {
            let mut reader = Reader::new(bytes);
            let decoded = NEGATIVE_DECODERS
                .iter()
                .find_map(|decode| decode(&mut reader).unwrap().value());
            assert_eq!(decoded, Some(expected));
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn decoded_helpers() {
        assert_eq!(Decoded::Value(2).map(|n| n * 2), Decoded::Value(4));
        assert!(Decoded::<u8>::Unknown.is_unknown());
        assert_eq!(Decoded::<u8>::Unknown.value(), None);
    }
}
