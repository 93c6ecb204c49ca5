//! Byte buffer utilities for cbor-serializer.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian integers from a byte slice with cursor tracking
//! - [`print_octets`] - Formats bytes as a hex string for logs and test output
//!
//! # Example
//!
//! ```
//! use cbor_serializer_buffers::{print_octets, Reader};
//!
//! let data = [0x18, 0x2a];
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8(), Ok(0x18));
//! assert_eq!(reader.u8(), Ok(0x2a));
//! assert_eq!(print_octets(&data, 16), "18 2a");
//! ```

mod print_octets;
mod reader;

pub use print_octets::{print_octets, print_octets_default};
pub use reader::Reader;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
        }
    }
}

impl std::error::Error for BufferError {}
