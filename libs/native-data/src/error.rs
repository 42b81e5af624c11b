//! Error types for native-data

use std::fmt;

use thiserror::Error;

/// Result type for native-data operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Which of the two buffers handed to a conversion was out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferSide {
    Source,
    Destination,
}

impl fmt::Display for BufferSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// Conversion errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Requested range `[start, start + len)` does not fit into a buffer of `capacity` units
    #[error("Out of bounds: {side} range {start}..{start}+{len} exceeds length {capacity}")]
    OutOfBounds {
        side: BufferSide,
        start: usize,
        len: usize,
        capacity: usize,
    },

    #[error("Invalid byte order: {0}")]
    InvalidByteOrder(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<figment::Error> for ConvertError {
    fn from(err: figment::Error) -> Self {
        ConvertError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl ConvertError {
    pub fn out_of_bounds(side: BufferSide, start: usize, len: usize, capacity: usize) -> Self {
        ConvertError::OutOfBounds {
            side,
            start,
            len,
            capacity,
        }
    }

    pub fn invalid_byte_order(msg: impl Into<String>) -> Self {
        ConvertError::InvalidByteOrder(msg.into())
    }

    pub fn unsupported_encoding(msg: impl Into<String>) -> Self {
        ConvertError::UnsupportedEncoding(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ConvertError::Config(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        ConvertError::Logging(msg.into())
    }

    /// Check if this error is a range violation
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ConvertError::OutOfBounds { .. })
    }
}
