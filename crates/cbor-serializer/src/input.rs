//! [`Value`] is the runtime value handed to the encoder registry.
//!
//! Encoders select values by shape: the built-in structural encoder knows
//! the intrinsic kinds below, values carrying a [`ToCbor`] or [`ToJson`]
//! capability are wrapped in trait objects, and anything else travels as an
//! opaque [`Value::Custom`] that a user-registered encoder can downcast.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::CborError;
use crate::types::CborValue;

/// A value that knows its own CBOR encoding.
pub trait ToCbor: Send + Sync {
    fn to_cbor(&self) -> Result<CborValue, CborError>;
}

/// A value that converts to JSON; the JSON form is encoded in its place.
pub trait ToJson: Send + Sync {
    fn to_json(&self) -> serde_json::Value;
}

#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Float(f64),
    /// Arbitrary-size integer; only encodable with an extension encoder.
    BigInt(i128),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Key/value mapping.
    Map(IndexMap<String, Value>),
    /// Plain record: fields in declaration order.
    Object(Vec<(String, Value)>),
    Json(Arc<dyn ToJson>),
    Cbor(Arc<dyn ToCbor>),
    Custom(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub fn custom<T: Any + Send + Sync>(value: T) -> Self {
        Value::Custom(Arc::new(value))
    }

    pub fn cbor<T: ToCbor + 'static>(value: T) -> Self {
        Value::Cbor(Arc::new(value))
    }

    pub fn json<T: ToJson + 'static>(value: T) -> Self {
        Value::Json(Arc::new(value))
    }

    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Borrows the payload of a [`Value::Custom`] as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::UInteger(_) => "integer",
            Value::Float(_) => "float",
            Value::BigInt(_) => "bigint",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Map(_) => "map",
            Value::Object(_) => "object",
            Value::Json(_) => "json",
            Value::Cbor(_) => "cbor",
            Value::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Value::UInteger(u) => f.debug_tuple("UInteger").field(u).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::BigInt(i) => f.debug_tuple("BigInt").field(i).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Value::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            Value::Json(json) => f.debug_tuple("Json").field(&json.to_json()).finish(),
            Value::Cbor(_) => f.write_str("Cbor(..)"),
            Value::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v.into())
                }
            }
        )*
    };
}

impl_from!(Bool: bool);
impl_from!(Integer: i8, i16, i32, i64);
impl_from!(UInteger: u8, u16, u32, u64);
impl_from!(Float: f32, f64);
impl_from!(BigInt: i128);
impl_from!(Str: &str, String);
impl_from!(Bytes: &[u8]);
impl_from!(Array: Vec<Value>);
impl_from!(Map: IndexMap<String, Value>);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInteger(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}
