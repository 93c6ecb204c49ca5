//! Byte-exact CBOR (RFC 8949) encoding.
//!
//! The crate has three layers:
//!
//! - [`value`]: pure primitives, each returning one encoded item as a
//!   [`CborValue`]. Integers can be written at the narrowest width or at an
//!   explicit width, which clamps instead of failing.
//! - [`CborSerializer`]: a priority-ordered registry of [`CborEncoder`]s that
//!   turns a runtime [`Value`] into CBOR, and [`SelfDescribeCborSerializer`],
//!   which prefixes documents with tag 55799.
//! - [`decode`]: integer decoders and the [`CborDeserializer`] registry.
//!
//! ```
//! use cbor_serializer::{SelfDescribeCborSerializer, Value};
//!
//! let serializer = SelfDescribeCborSerializer::with_default_encoders();
//! let bytes = serializer.serialize(&Value::from(123)).unwrap();
//! assert_eq!(bytes, [0xd9, 0xd9, 0xf7, 0x18, 0x7b]);
//! ```

pub mod constants;
pub mod decode;
pub mod encoders;
mod error;
mod input;
mod serializer;
mod types;
pub mod value;

pub use cbor_serializer_buffers::{print_octets, Reader};
pub use decode::{CborDecoder, CborDeserializer, Decoded, IntegerCborDecoder};
pub use encoders::{BigIntEncoder, DateNumberEncoder, DateStringEncoder};
pub use error::CborError;
pub use input::{ToCbor, ToJson, Value};
pub use serializer::{
    CborEncoder, CborSerializer, JsonDefaultCborEncoder, SelfDescribeCborSerializer, Serializer,
    ToCborEncoder,
};
pub use types::CborValue;
pub use value::MapOrder;
