use std::fmt;

use cbor_serializer_buffers::Reader;
use tracing::{debug, trace};

use super::{Decoded, NEGATIVE_DECODERS, UNSIGNED_DECODERS};
use crate::error::CborError;
use crate::input::Value;

/// A registrable decoder, the read-side counterpart of
/// [`CborEncoder`](crate::CborEncoder).
pub trait CborDecoder: Send + Sync {
    fn name(&self) -> &str;
    fn priority(&self) -> i32;
    /// Must leave `reader` untouched unless it returns [`Decoded::Value`].
    fn decode(&self, reader: &mut Reader<'_>) -> Result<Decoded<Value>, CborError>;
}

/// Decodes major types 0 and 1 at every width.
///
/// Unsigned items become [`Value::UInteger`]; negatives become
/// [`Value::Integer`], or [`Value::BigInt`] below `i64::MIN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerCborDecoder;

impl IntegerCborDecoder {
    pub const NAME: &'static str = "integer";
    pub const PRIORITY: i32 = -100;

    pub fn new() -> Self {
        Self
    }
}

impl CborDecoder for IntegerCborDecoder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn decode(&self, reader: &mut Reader<'_>) -> Result<Decoded<Value>, CborError> {
        for decode in UNSIGNED_DECODERS {
            if let Decoded::Value(n) = decode(reader)? {
                return Ok(Decoded::Value(Value::UInteger(n)));
            }
        }
        for decode in NEGATIVE_DECODERS {
            if let Decoded::Value(n) = decode(reader)? {
                let value = i64::try_from(n).map_or(Value::BigInt(n), Value::Integer);
                return Ok(Decoded::Value(value));
            }
        }
        Ok(Decoded::Unknown)
    }
}

#[derive(Default)]
pub struct CborDeserializer {
    decoders: Vec<Box<dyn CborDecoder>>,
}

impl CborDeserializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_decoders() -> Self {
        let mut deserializer = Self::new();
        deserializer.add_decoder(IntegerCborDecoder::new());
        deserializer
    }

    pub fn add_decoder<D: CborDecoder + 'static>(&mut self, decoder: D) -> &mut Self {
        debug!(
            name = decoder.name(),
            priority = decoder.priority(),
            "adding cbor decoder"
        );
        self.decoders.push(Box::new(decoder));
        self
    }

    /// Removes every decoder named `name`, returning how many were removed.
    pub fn remove_decoder(&mut self, name: &str) -> usize {
        let before = self.decoders.len();
        self.decoders.retain(|decoder| decoder.name() != name);
        let removed = before - self.decoders.len();
        debug!(name, removed, "removed cbor decoders");
        removed
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decodes the item under the cursor.
    ///
    /// Decoders run by descending priority, registration order on ties,
    /// until one recognizes the item.
    pub fn deserialize_value(&self, reader: &mut Reader<'_>) -> Result<Value, CborError> {
        if reader.is_empty() {
            return Err(CborError::EmptyInput);
        }
        let mut ranked: Vec<&dyn CborDecoder> =
            self.decoders.iter().map(|decoder| decoder.as_ref()).collect();
        // Stable, so equal priorities keep registration order.
        ranked.sort_by_key(|decoder| std::cmp::Reverse(decoder.priority()));
        for decoder in ranked {
            if let Decoded::Value(value) = decoder.decode(reader)? {
                trace!(
                    decoder = decoder.name(),
                    kind = value.kind(),
                    offset = reader.x,
                    "decoded value"
                );
                return Ok(value);
            }
        }
        Err(CborError::NoDecoderFound)
    }

    /// Decodes `data` as exactly one item.
    pub fn deserialize(&self, data: &[u8]) -> Result<Value, CborError> {
        let mut reader = Reader::new(data);
        let value = self.deserialize_value(&mut reader)?;
        match reader.size() {
            0 => Ok(value),
            left => Err(CborError::TrailingBytes(left)),
        }
    }
}

impl fmt::Debug for CborDeserializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.decoders
                    .iter()
                    .map(|decoder| (decoder.name(), decoder.priority())),
            )
            .finish()
    }
}
