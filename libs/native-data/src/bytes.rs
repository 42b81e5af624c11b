//! Binary data processing utilities
//!
//! Byte order handling, the per-element byte swap and typed buffer
//! conversions between scalar sequences and raw byte buffers.

pub mod byte_order;
pub mod conversions;
pub mod scalar;
pub mod swap;

pub use byte_order::{is_host_little_endian, ByteOrder};
pub use conversions::*;
pub use scalar::{Scalar, ScalarWidth};
pub use swap::{change_byte_order, reverse_chunk};
