//! CBOR constants.

// MAJOR type values (bits 7-5 of the initial byte)
pub const MAJOR_UIN: u8 = 0b000;
pub const MAJOR_NIN: u8 = 0b001;
pub const MAJOR_BIN: u8 = 0b010;
pub const MAJOR_STR: u8 = 0b011;
pub const MAJOR_ARR: u8 = 0b100;
pub const MAJOR_MAP: u8 = 0b101;
pub const MAJOR_TAG: u8 = 0b110;
pub const MAJOR_TKN: u8 = 0b111;

/// Mask selecting the major type bits of an initial byte.
pub const MAJOR_MASK: u8 = 0b111_00000;
/// Mask selecting the additional-information bits of an initial byte.
pub const MINOR_MASK: u8 = 0b11111;

// Additional-information values selecting a 1/2/4/8-byte extension.
pub const MINOR_INT8: u8 = 24;
pub const MINOR_INT16: u8 = 25;
pub const MINOR_INT32: u8 = 26;
pub const MINOR_INT64: u8 = 27;

// Major type 7 minors.
pub const MINOR_FALSE: u8 = 20;
pub const MINOR_TRUE: u8 = 21;
pub const MINOR_NULL: u8 = 22;
pub const MINOR_UNDEFINED: u8 = 23;
pub const MINOR_FLOAT32: u8 = 26;
pub const MINOR_FLOAT64: u8 = 27;

/// Largest magnitude embedded directly in the initial byte.
pub const MAX_SMALL: u8 = 23;

/// Tag number marking a stream as CBOR (RFC 8949 §3.4.6).
pub const SELF_DESCRIBE_TAG: u64 = 55799;

/// Wire form of [`SELF_DESCRIBE_TAG`].
pub const SELF_DESCRIBE_PROLOGUE: [u8; 3] = [0xd9, 0xd9, 0xf7];

// Semantic tags produced by the extension encoders.
pub const TAG_DATE_STRING: u64 = 0;
pub const TAG_DATE_EPOCH: u64 = 1;
pub const TAG_POSITIVE_BIGNUM: u64 = 2;
pub const TAG_NEGATIVE_BIGNUM: u64 = 3;

/// Builds an initial byte from a major type and additional information.
#[inline]
pub const fn initial_byte(major: u8, minor: u8) -> u8 {
    (major << 5) | (minor & MINOR_MASK)
}
