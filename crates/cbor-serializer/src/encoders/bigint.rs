use crate::constants::{TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM};
use crate::error::CborError;
use crate::input::Value;
use crate::serializer::{CborEncoder, CborSerializer};
use crate::types::CborValue;
use crate::value;

/// Writes [`Value::BigInt`] as a bignum: tag 2 for non-negative values, tag
/// 3 with magnitude `-1 - n` otherwise, around the big-endian magnitude
/// with leading zero bytes stripped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntEncoder;

impl BigIntEncoder {
    pub const NAME: &'static str = "bigint";
    pub const PRIORITY: i32 = -10;

    pub fn new() -> Self {
        Self
    }
}

/// Big-endian bytes of `n`, at least one byte.
fn magnitude_bytes(n: u128) -> Vec<u8> {
    let be = n.to_be_bytes();
    let start = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    be[start..].to_vec()
}

impl CborEncoder for BigIntEncoder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::BigInt(_))
    }

    fn encode(&self, value: &Value, _: &CborSerializer) -> Result<CborValue, CborError> {
        let Value::BigInt(n) = *value else {
            return Err(CborError::UnsupportedValueShape(value.kind()));
        };
        let (tag, magnitude) = if n >= 0 {
            (TAG_POSITIVE_BIGNUM, n as u128)
        } else {
            (TAG_NEGATIVE_BIGNUM, (-1 - n) as u128)
        };
        Ok(value::tagged(tag, &value::bytes(&magnitude_bytes(magnitude))))
    }
}
