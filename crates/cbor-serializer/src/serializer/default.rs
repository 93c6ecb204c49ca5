//! The two built-in encoders.

use super::{CborEncoder, CborSerializer};
use crate::error::CborError;
use crate::input::Value;
use crate::types::CborValue;
use crate::value::{self, MapOrder};

/// 2^64: integral floats below this magnitude are written as integers.
const INTEGER_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Structural encoder for the intrinsic kinds of [`Value`].
///
/// Integral numbers use the narrowest integer form; other floats are written
/// in double precision. Arrays, maps and records recurse through the
/// dispatching serializer for each element or field value. A
/// [`Value::Json`] is replaced by its JSON form, which is then encoded here.
#[derive(Debug, Clone, Default)]
pub struct JsonDefaultCborEncoder {
    map_order: MapOrder,
}

impl JsonDefaultCborEncoder {
    pub const NAME: &'static str = "jsonDefault";
    pub const PRIORITY: i32 = -100;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map_order(map_order: MapOrder) -> Self {
        Self { map_order }
    }

    fn encode_float(&self, f: f64) -> Result<CborValue, CborError> {
        if f.is_finite() && f.fract() == 0.0 && (-INTEGER_LIMIT..INTEGER_LIMIT).contains(&f) {
            value::number(f)
        } else {
            Ok(value::double_float(f))
        }
    }

    fn encode_entries<'a>(
        &self,
        entries: impl Iterator<Item = (&'a String, &'a Value)>,
        serializer: &CborSerializer,
    ) -> Result<CborValue, CborError> {
        let encoded = entries
            .map(|(key, item)| {
                serializer
                    .serialize_value(item)
                    .map(|encoded| (key.as_str(), encoded))
            })
            .collect::<Result<Vec<_>, CborError>>()?;
        Ok(value::map(&encoded, self.map_order))
    }
}

impl CborEncoder for JsonDefaultCborEncoder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn matches(&self, value: &Value) -> bool {
        !matches!(
            value,
            Value::BigInt(_) | Value::Cbor(_) | Value::Custom(_)
        )
    }

    fn encode(&self, value: &Value, serializer: &CborSerializer) -> Result<CborValue, CborError> {
        match value {
            Value::Undefined => Ok(value::undefined()),
            Value::Null => Ok(value::null()),
            Value::Bool(b) => Ok(value::boolean(*b)),
            Value::Integer(i) => value::number(*i),
            Value::UInteger(u) => value::number(*u),
            Value::Float(f) => self.encode_float(*f),
            Value::Str(s) => Ok(value::string(s)),
            Value::Bytes(b) => Ok(value::bytes(b)),
            Value::Array(items) => {
                let encoded = items
                    .iter()
                    .map(|item| serializer.serialize_value(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(value::array(&encoded))
            }
            Value::Json(json) => self.encode(&Value::from(json.to_json()), serializer),
            Value::Map(map) => self.encode_entries(map.iter(), serializer),
            Value::Object(fields) => {
                self.encode_entries(fields.iter().map(|(k, v)| (k, v)), serializer)
            }
            other => Err(CborError::UnsupportedValueShape(other.kind())),
        }
    }
}

/// Defers to values carrying the [`ToCbor`](crate::ToCbor) capability.
#[derive(Debug, Clone, Default)]
pub struct ToCborEncoder;

impl ToCborEncoder {
    pub const NAME: &'static str = "cborEncoder";
    pub const PRIORITY: i32 = -90;

    pub fn new() -> Self {
        Self
    }
}

impl CborEncoder for ToCborEncoder {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn matches(&self, value: &Value) -> bool {
        matches!(value, Value::Cbor(_))
    }

    fn encode(&self, value: &Value, _: &CborSerializer) -> Result<CborValue, CborError> {
        match value {
            Value::Cbor(item) => item.to_cbor(),
            other => Err(CborError::UnsupportedValueShape(other.kind())),
        }
    }
}
