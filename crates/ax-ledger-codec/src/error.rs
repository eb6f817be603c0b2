//! Codec error taxonomy.

use shared_types::ChainError;
use thiserror::Error;

/// Failures while encoding or decoding canonical wire data.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A fixed-size field arrived with the wrong length.
    #[error("expected {expected} bytes, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A fixed-width read would run past the end of the buffer.
    #[error("read of {width} bytes at offset {offset} exceeds buffer of {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// A decoded value does not fit the target integer type.
    #[error("decoded value exceeds the target integer width")]
    IntegerOverflow,

    /// A header field carried wider than its domain type is out of range.
    #[error("{field}: value out of range")]
    FieldRange { field: &'static str },

    /// The wire stream itself is malformed.
    #[error("malformed wire data: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A block-level invariant failed during reconstruction.
    #[error(transparent)]
    Chain(#[from] ChainError),
}
