//! Encoder registry.
//!
//! A [`CborSerializer`] holds boxed [`CborEncoder`]s and, for each value,
//! runs the highest-priority encoder whose `matches` accepts it. Compound
//! encoders recurse through the same serializer for nested values, so a
//! user-registered encoder applies at any depth.
//!
//! ```
//! use cbor_serializer::{CborSerializer, Value};
//!
//! let serializer = CborSerializer::with_default_encoders();
//! let value = Value::object([("A", Value::from(true)), ("C", Value::from(123))]);
//! assert_eq!(serializer.serialize_value(&value).unwrap().to_string(), "a26141f56143187b");
//! ```

mod default;
mod self_describe;

pub use default::{JsonDefaultCborEncoder, ToCborEncoder};
pub use self_describe::SelfDescribeCborSerializer;

use std::fmt;

use cbor_serializer_buffers::print_octets_default;
use tracing::{debug, trace};

use crate::error::CborError;
use crate::input::Value;
use crate::types::CborValue;
use crate::value::MapOrder;

/// A registrable encoder.
///
/// `matches` must be pure: the registry may call it many times for the same
/// value within one serialization. `encode` receives the serializer that
/// dispatched it and should use it for nested values.
pub trait CborEncoder: Send + Sync {
    /// Family name; [`CborSerializer::remove_encoder`] removes by name.
    fn name(&self) -> &str;
    /// Higher wins. The built-ins use -100 and -90.
    fn priority(&self) -> i32;
    fn matches(&self, value: &Value) -> bool;
    fn encode(&self, value: &Value, serializer: &CborSerializer) -> Result<CborValue, CborError>;
}

/// Top-level serialization entry points shared by the plain and the
/// self-describing serializer.
pub trait Serializer {
    /// Encodes one value; this is what encoders recurse into.
    fn serialize_value(&self, value: &Value) -> Result<CborValue, CborError>;
    /// Encodes a complete document.
    fn serialize(&self, value: &Value) -> Result<Vec<u8>, CborError>;
}

#[derive(Default)]
pub struct CborSerializer {
    encoders: Vec<Box<dyn CborEncoder>>,
}

impl CborSerializer {
    /// Creates a registry with no encoders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the structural and the [`ToCborEncoder`]
    /// built-ins, writing maps in insertion order.
    pub fn with_default_encoders() -> Self {
        Self::with_default_encoders_ordered(MapOrder::Insertion)
    }

    /// Like [`Self::with_default_encoders`], with the structural encoder
    /// writing maps in `order`.
    pub fn with_default_encoders_ordered(order: MapOrder) -> Self {
        let mut serializer = Self::new();
        serializer
            .add_encoder(JsonDefaultCborEncoder::with_map_order(order))
            .add_encoder(ToCborEncoder::new());
        serializer
    }

    pub fn add_encoder<E: CborEncoder + 'static>(&mut self, encoder: E) -> &mut Self {
        self.add_boxed_encoder(Box::new(encoder))
    }

    pub fn add_boxed_encoder(&mut self, encoder: Box<dyn CborEncoder>) -> &mut Self {
        debug!(
            name = encoder.name(),
            priority = encoder.priority(),
            "adding cbor encoder"
        );
        self.encoders.push(encoder);
        self
    }

    /// Removes every encoder named `name`, returning how many were removed.
    pub fn remove_encoder(&mut self, name: &str) -> usize {
        let before = self.encoders.len();
        self.encoders.retain(|encoder| encoder.name() != name);
        let removed = before - self.encoders.len();
        debug!(name, removed, "removed cbor encoders");
        removed
    }

    pub fn len(&self) -> usize {
        self.encoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.encoders.is_empty()
    }

    /// Names of the registered encoders, in registration order.
    pub fn encoder_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.encoders.iter().map(|encoder| encoder.name())
    }

    /// Picks the encoder for `value`.
    ///
    /// Encoders are scanned in registration order and a later one is only
    /// consulted when its priority is strictly higher than the current
    /// pick, so among equal priorities the first registered match wins.
    pub fn encoder_for(&self, value: &Value) -> Result<&dyn CborEncoder, CborError> {
        let mut chosen: Option<&dyn CborEncoder> = None;
        for encoder in &self.encoders {
            let outranks = chosen.map_or(true, |c| encoder.priority() > c.priority());
            if outranks && encoder.matches(value) {
                chosen = Some(encoder.as_ref());
            }
        }
        chosen.ok_or(CborError::NoEncoderFound)
    }

    pub fn serialize_value(&self, value: &Value) -> Result<CborValue, CborError> {
        let encoder = self.encoder_for(value)?;
        let encoded = encoder.encode(value, self)?;
        trace!(
            encoder = encoder.name(),
            kind = value.kind(),
            bytes = %print_octets_default(encoded.as_bytes()),
            "encoded value"
        );
        Ok(encoded)
    }

    pub fn serialize(&self, value: &Value) -> Result<Vec<u8>, CborError> {
        Ok(self.serialize_value(value)?.into_vec())
    }
}

impl Serializer for CborSerializer {
    fn serialize_value(&self, value: &Value) -> Result<CborValue, CborError> {
        CborSerializer::serialize_value(self, value)
    }

    fn serialize(&self, value: &Value) -> Result<Vec<u8>, CborError> {
        CborSerializer::serialize(self, value)
    }
}

impl fmt::Debug for CborSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.encoders
                    .iter()
                    .map(|encoder| (encoder.name(), encoder.priority())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    struct Fixed {
        name: &'static str,
        priority: i32,
        output: u8,
    }

    impl CborEncoder for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn matches(&self, value: &Value) -> bool {
            matches!(value, Value::Str(_))
        }

        fn encode(&self, _: &Value, _: &CborSerializer) -> Result<CborValue, CborError> {
            value::u_small(self.output)
        }
    }

    fn fixed(name: &'static str, priority: i32, output: u8) -> Fixed {
        Fixed {
            name,
            priority,
            output,
        }
    }

    #[test]
    fn empty_registry_finds_nothing() {
        let serializer = CborSerializer::new();
        assert!(serializer.is_empty());
        assert_eq!(
            serializer.serialize(&Value::Null),
            Err(CborError::NoEncoderFound)
        );
    }

    #[test]
    fn highest_priority_wins_regardless_of_order() {
        let mut serializer = CborSerializer::with_default_encoders();
        serializer.add_encoder(fixed("low", -50, 1));
        serializer.add_encoder(fixed("high", 10, 2));
        serializer.add_encoder(fixed("mid", 0, 3));
        assert_eq!(serializer.serialize(&Value::from("x")).unwrap(), vec![0x02]);
    }

    #[test]
    fn ties_go_to_the_first_registered() {
        let mut serializer = CborSerializer::new();
        serializer.add_encoder(fixed("first", 5, 1));
        serializer.add_encoder(fixed("second", 5, 2));
        for _ in 0..3 {
            assert_eq!(serializer.serialize(&Value::from("x")).unwrap(), vec![0x01]);
        }
        assert_eq!(serializer.encoder_for(&Value::from("x")).unwrap().name(), "first");
    }

    #[test]
    fn remove_drops_the_whole_family() {
        let mut serializer = CborSerializer::with_default_encoders();
        serializer.add_encoder(fixed("family", 1, 1));
        serializer.add_encoder(fixed("family", 2, 2));
        assert_eq!(serializer.len(), 4);
        assert_eq!(serializer.remove_encoder("family"), 2);
        assert_eq!(serializer.remove_encoder("family"), 0);
        assert_eq!(
            serializer.encoder_names().collect::<Vec<_>>(),
            [JsonDefaultCborEncoder::NAME, ToCborEncoder::NAME]
        );
        assert_eq!(serializer.serialize(&Value::from("x")).unwrap(), vec![0x61, b'x']);
    }

    #[test]
    fn debug_lists_names_and_priorities() {
        let serializer = CborSerializer::with_default_encoders();
        assert_eq!(
            format!("{serializer:?}"),
            r#"[("jsonDefault", -100), ("cborEncoder", -90)]"#
        );
    }
}
