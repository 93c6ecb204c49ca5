//! Optional encoders for semantic tags.
//!
//! None of these are registered by
//! [`CborSerializer::with_default_encoders`](crate::CborSerializer::with_default_encoders);
//! add the ones you need.

mod bigint;
mod date;

pub use bigint::BigIntEncoder;
pub use date::{DateNumberEncoder, DateStringEncoder};
