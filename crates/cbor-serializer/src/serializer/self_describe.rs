//! Self-describing serializer.

use super::{CborEncoder, CborSerializer, Serializer};
use crate::constants::SELF_DESCRIBE_PROLOGUE;
use crate::error::CborError;
use crate::input::Value;
use crate::types::CborValue;

/// Wraps a [`CborSerializer`] and prefixes every document with the
/// self-describe tag `d9 d9 f7`.
///
/// Only [`serialize`](Self::serialize) adds the prologue. Nested values are
/// encoded by the wrapped registry, so they never carry it.
///
/// ```
/// use cbor_serializer::{SelfDescribeCborSerializer, Value};
///
/// let serializer = SelfDescribeCborSerializer::with_default_encoders();
/// assert_eq!(serializer.serialize(&Value::from(1)).unwrap(), [0xd9, 0xd9, 0xf7, 0x01]);
/// ```
#[derive(Debug, Default)]
pub struct SelfDescribeCborSerializer {
    inner: CborSerializer,
}

impl SelfDescribeCborSerializer {
    pub fn new(inner: CborSerializer) -> Self {
        Self { inner }
    }

    pub fn with_default_encoders() -> Self {
        Self::new(CborSerializer::with_default_encoders())
    }

    pub fn inner(&self) -> &CborSerializer {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut CborSerializer {
        &mut self.inner
    }

    pub fn into_inner(self) -> CborSerializer {
        self.inner
    }

    pub fn add_encoder<E: CborEncoder + 'static>(&mut self, encoder: E) -> &mut Self {
        self.inner.add_encoder(encoder);
        self
    }

    pub fn remove_encoder(&mut self, name: &str) -> usize {
        self.inner.remove_encoder(name)
    }

    /// Encodes one value without the prologue.
    pub fn serialize_value(&self, value: &Value) -> Result<CborValue, CborError> {
        self.inner.serialize_value(value)
    }

    pub fn serialize(&self, value: &Value) -> Result<Vec<u8>, CborError> {
        let body = self.inner.serialize_value(value)?;
        let mut out = Vec::with_capacity(SELF_DESCRIBE_PROLOGUE.len() + body.len());
        out.extend_from_slice(&SELF_DESCRIBE_PROLOGUE);
        out.extend_from_slice(body.as_bytes());
        Ok(out)
    }
}

impl From<CborSerializer> for SelfDescribeCborSerializer {
    fn from(inner: CborSerializer) -> Self {
        Self::new(inner)
    }
}

impl Serializer for SelfDescribeCborSerializer {
    fn serialize_value(&self, value: &Value) -> Result<CborValue, CborError> {
        SelfDescribeCborSerializer::serialize_value(self, value)
    }

    fn serialize(&self, value: &Value) -> Result<Vec<u8>, CborError> {
        SelfDescribeCborSerializer::serialize(self, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prologue_only_at_top_level() {
        let serializer = SelfDescribeCborSerializer::with_default_encoders();
        let nested = Value::Array(vec![Value::Array(vec![Value::from(1)])]);
        assert_eq!(serializer.serialize(&nested).unwrap(), [0xd9, 0xd9, 0xf7, 0x81, 0x81, 0x01]);
        assert_eq!(serializer.serialize_value(&nested).unwrap().as_bytes(), [0x81, 0x81, 0x01]);
    }

    #[test]
    fn errors_pass_through() {
        let serializer = SelfDescribeCborSerializer::new(CborSerializer::new());
        assert_eq!(serializer.serialize(&Value::Null), Err(CborError::NoEncoderFound));
    }

    #[test]
    fn works_behind_the_serializer_trait() {
        fn document(s: &dyn Serializer) -> Vec<u8> {
            s.serialize(&Value::from("A")).unwrap()
        }
        let plain = CborSerializer::with_default_encoders();
        let described = SelfDescribeCborSerializer::from(CborSerializer::with_default_encoders());
        assert_eq!(document(&plain), [0x61, 0x41]);
        assert_eq!(document(&described), [0xd9, 0xd9, 0xf7, 0x61, 0x41]);
    }
}
