use cbor_serializer_buffers::BufferError;
use thiserror::Error;

/// Error type for CBOR encoding/decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("invalid number")]
    InvalidNumber,
    #[error("could not find an encoder for value")]
    NoEncoderFound,
    #[error("unsupported value shape: {0}")]
    UnsupportedValueShape(&'static str),
    #[error("empty input")]
    EmptyInput,
    #[error("could not find a decoder for input")]
    NoDecoderFound,
    #[error("{0} trailing bytes after cbor item")]
    TrailingBytes(usize),
}

impl From<BufferError> for CborError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => CborError::EmptyInput,
        }
    }
}
