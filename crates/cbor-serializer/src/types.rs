//! The encoded item type shared by every primitive.

use std::fmt;

/// One complete, already-encoded CBOR data item.
///
/// A `CborValue` owns its bytes and exposes them read-only. Container
/// primitives concatenate the bytes of their elements verbatim, so any
/// sequence of values can be framed by an array or map header without
/// re-parsing.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct CborValue(Vec<u8>);

impl CborValue {
    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CborValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<CborValue> for Vec<u8> {
    fn from(value: CborValue) -> Self {
        value.0
    }
}

/// Lowercase hex, no separators.
impl fmt::Display for CborValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CborValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CborValue({})", self)
    }
}
