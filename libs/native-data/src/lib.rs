//! native-data - typed buffer conversion for native interop
//!
//! Converts between sequences of fixed-width scalars and flat byte buffers,
//! optionally reversing the bytes of each element.
//!
//! # Architecture
//!
//! - **Bytes**: `ByteOrder`, `ScalarWidth`, the `Scalar` trait, the byte-swap
//!   kernel and the sub-range conversions `scalars_to_bytes` / `bytes_to_scalars`
//! - **Array**: `ScalarArray`, an owned sequence whose width is picked at runtime
//! - **Encoding**: self-describing tagged arrays (`encode_tagged` / `decode_tagged`)
//! - **Config / Logging**: ambient setup for host processes
//!
//! # Example
//!
//! ```rust
//! use native_data::{bytes_to_scalars, scalars_to_bytes, ByteOrder};
//!
//! let values = [1i16, 256, -1];
//! let mut buf = [0u8; 6];
//! let written = scalars_to_bytes(&values, 0, &mut buf, 0, 3, ByteOrder::BigEndian).unwrap();
//! assert_eq!(written, 6);
//! assert_eq!(buf, [0x00, 0x01, 0x01, 0x00, 0xFF, 0xFF]);
//!
//! let mut back = [0i16; 3];
//! bytes_to_scalars(&buf, 0, &mut back, 0, 3, ByteOrder::BigEndian).unwrap();
//! assert_eq!(back, values);
//! ```

pub mod array;
pub mod bytes;
pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;

// Re-export core types
pub use array::ScalarArray;
pub use self::bytes::{
    bytes_to_scalar, bytes_to_scalars, change_byte_order, from_bytes, is_host_little_endian,
    reverse_chunk, scalar_to_bytes, scalars_to_bytes, to_bytes, ByteOrder, Scalar, ScalarWidth,
};
pub use config::{LogConfig, NativeDataConfig};
pub use encoding::{decode_tagged, encode_tagged, is_tagged, ArrayEncoding, HEADER_SIZE};
pub use error::{BufferSide, ConvertError, Result};
pub use logging::init_logging;
