//! Self-describing byte encoding of one-dimensional scalar arrays
//!
//! # Layout
//!
//! | Offset | Size | Content                                              |
//! |--------|------|------------------------------------------------------|
//! | 0      | 1    | kind: `'I'` integer, `'F'` floating point            |
//! | 1      | 1    | order: `'L'` little, `'B'` big, `'N'` native (1-byte)|
//! | 2      | 1    | element size in bytes                                |
//! | 3      | 1    | rank, always 1                                       |
//! | 4      | 4    | element count, `u32` in the array's byte order       |
//! | 8      | n    | payload, `count * size` bytes                        |
//!
//! Single-byte arrays carry `'N'` and store their count little-endian.

use ::bytes::{Buf, BufMut};
use tracing::{debug, warn};

use crate::array::ScalarArray;
use crate::bytes::{ByteOrder, ScalarWidth};
use crate::error::{BufferSide, ConvertError, Result};

/// Size of the fixed header preceding the payload
pub const HEADER_SIZE: usize = 8;

const CHAR_I: u8 = b'I';
const CHAR_F: u8 = b'F';
const CHAR_L: u8 = b'L';
const CHAR_B: u8 = b'B';
const CHAR_N: u8 = b'N';

const RANK_ONE: u8 = 1;

/// Element width and byte order of a tagged array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayEncoding {
    width: ScalarWidth,
    order: ByteOrder,
}

impl ArrayEncoding {
    /// Build an encoding, pinning the order to something a reader can rely on
    ///
    /// Single-byte widths have no byte order and always use `Native`; wider
    /// widths turn `Native` into the host's concrete order.
    pub fn new(width: ScalarWidth, order: ByteOrder) -> Self {
        let order = if width.size_in_bytes() == 1 {
            ByteOrder::Native
        } else {
            order.resolve()
        };
        Self { width, order }
    }

    pub fn width(&self) -> ScalarWidth {
        self.width
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    pub fn size_in_bytes(&self) -> usize {
        self.width.size_in_bytes()
    }

    pub fn is_floating_point(&self) -> bool {
        self.width.is_floating_point()
    }

    pub fn is_integer(&self) -> bool {
        self.width.is_integer()
    }

    /// The three leading header bytes: kind, order and size
    pub fn magic(&self) -> [u8; 3] {
        let kind = if self.is_floating_point() { CHAR_F } else { CHAR_I };
        let order = match self.order {
            ByteOrder::LittleEndian => CHAR_L,
            ByteOrder::BigEndian => CHAR_B,
            ByteOrder::Native => CHAR_N,
        };
        [kind, order, self.size_in_bytes() as u8]
    }

    /// Recognise the encoding of `bytes`, or `None` if it is not a tagged array
    pub fn try_from_header(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_SIZE {
            return None;
        }

        let floating_point = match bytes[0] {
            CHAR_F => true,
            CHAR_I => false,
            _ => return None,
        };
        let order = match bytes[1] {
            CHAR_L => ByteOrder::LittleEndian,
            CHAR_B => ByteOrder::BigEndian,
            CHAR_N => ByteOrder::Native,
            _ => return None,
        };
        let width = ScalarWidth::from_parts(floating_point, bytes[2] as usize)?;

        // Native is reserved for single bytes, and single bytes are always native
        if (width.size_in_bytes() == 1) != (order == ByteOrder::Native) {
            return None;
        }

        Some(Self { width, order })
    }

    fn put_count(&self, buf: &mut impl BufMut, count: u32) {
        match self.order {
            ByteOrder::BigEndian => buf.put_u32(count),
            ByteOrder::LittleEndian | ByteOrder::Native => buf.put_u32_le(count),
        }
    }

    fn get_count(&self, mut field: &[u8]) -> u32 {
        match self.order {
            ByteOrder::BigEndian => field.get_u32(),
            ByteOrder::LittleEndian | ByteOrder::Native => field.get_u32_le(),
        }
    }
}

/// Returns `true` if `bytes` starts with a recognised tagged header
pub fn is_tagged(bytes: &[u8]) -> bool {
    ArrayEncoding::try_from_header(bytes).is_some()
}

/// Encode `array` with a header describing its width, order and length
pub fn encode_tagged(array: &ScalarArray, order: ByteOrder) -> Result<Vec<u8>> {
    let encoding = ArrayEncoding::new(array.width(), order);
    let count = u32::try_from(array.len()).map_err(|_| {
        ConvertError::unsupported_encoding(format!(
            "{} elements do not fit the header count field",
            array.len()
        ))
    })?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + array.byte_len());
    buf.put_slice(&encoding.magic());
    buf.put_u8(RANK_ONE);
    encoding.put_count(&mut buf, count);
    buf.put_slice(&array.to_bytes(encoding.byte_order()));

    debug!(
        "Encoded tagged {} array: {} elements, {}",
        encoding.width(),
        count,
        encoding.byte_order()
    );
    Ok(buf)
}

/// Decode a buffer produced by [`encode_tagged`]
pub fn decode_tagged(bytes: &[u8]) -> Result<ScalarArray> {
    let encoding = ArrayEncoding::try_from_header(bytes).ok_or_else(|| {
        let shown = &bytes[..bytes.len().min(3)];
        warn!("Unrecognised tagged array header: {:02X?}", shown);
        ConvertError::unsupported_encoding(format!("unrecognised header {:02X?}", shown))
    })?;

    let rank = bytes[3];
    if rank != RANK_ONE {
        return Err(ConvertError::unsupported_encoding(format!(
            "rank {} arrays are not supported",
            rank
        )));
    }

    let count = encoding.get_count(&bytes[4..HEADER_SIZE]) as usize;
    let payload = &bytes[HEADER_SIZE..];
    let expected = count.checked_mul(encoding.size_in_bytes());
    match expected {
        Some(expected) if expected == payload.len() => {
            ScalarArray::from_bytes(encoding.width(), payload, encoding.byte_order())
        },
        Some(expected) if expected < payload.len() => {
            Err(ConvertError::unsupported_encoding(format!(
                "{} trailing bytes after {} elements",
                payload.len() - expected,
                count
            )))
        },
        _ => Err(ConvertError::out_of_bounds(
            BufferSide::Source,
            HEADER_SIZE,
            expected.unwrap_or(usize::MAX),
            bytes.len(),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_magic() {
        let enc = ArrayEncoding::new(ScalarWidth::Float64, ByteOrder::BigEndian);
        assert_eq!(enc.magic(), [b'F', b'B', 8]);

        let enc = ArrayEncoding::new(ScalarWidth::Int16, ByteOrder::LittleEndian);
        assert_eq!(enc.magic(), [b'I', b'L', 2]);

        let enc = ArrayEncoding::new(ScalarWidth::Int8, ByteOrder::BigEndian);
        assert_eq!(enc.magic(), [b'I', b'N', 1]);
        assert_eq!(enc.byte_order(), ByteOrder::Native);
    }

    #[test]
    fn test_native_resolves_for_wide_widths() {
        let enc = ArrayEncoding::new(ScalarWidth::Int32, ByteOrder::Native);
        assert_eq!(enc.byte_order(), ByteOrder::host());
        assert!(enc.is_integer());
        assert_eq!(enc.size_in_bytes(), 4);
    }

    #[test]
    fn test_header_layout() {
        let array = ScalarArray::from(vec![0x0102i16, 0x0304]);
        let bytes = encode_tagged(&array, ByteOrder::BigEndian).unwrap();
        assert_eq!(
            bytes,
            vec![b'I', b'B', 2, 1, 0, 0, 0, 2, 0x01, 0x02, 0x03, 0x04]
        );

        let bytes = encode_tagged(&array, ByteOrder::LittleEndian).unwrap();
        assert_eq!(
            bytes,
            vec![b'I', b'L', 2, 1, 2, 0, 0, 0, 0x02, 0x01, 0x04, 0x03]
        );
    }

    #[test]
    fn test_try_from_header_rejects() {
        assert_eq!(ArrayEncoding::try_from_header(b"IL\x04\x01"), None);
        assert_eq!(ArrayEncoding::try_from_header(b"XL\x04\x01\0\0\0\0"), None);
        assert_eq!(ArrayEncoding::try_from_header(b"IX\x04\x01\0\0\0\0"), None);
        assert_eq!(ArrayEncoding::try_from_header(b"FL\x02\x01\0\0\0\0"), None);
        assert_eq!(ArrayEncoding::try_from_header(b"IN\x04\x01\0\0\0\0"), None);
        assert_eq!(ArrayEncoding::try_from_header(b"IL\x01\x01\0\0\0\0"), None);
        assert!(ArrayEncoding::try_from_header(b"IN\x01\x01\0\0\0\0").is_some());
    }

    #[test]
    fn test_decode_rejects_rank() {
        let bytes = [b'I', b'L', 4, 2, 0, 0, 0, 0];
        let err = decode_tagged(&bytes).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedEncoding(_)));
    }

    #[test]
    fn test_decode_short_payload() {
        let bytes = [b'F', b'L', 4, 1, 2, 0, 0, 0, 0, 0, 0x80, 0x3F];
        let err = decode_tagged(&bytes).unwrap_err();
        assert_eq!(
            err,
            ConvertError::out_of_bounds(BufferSide::Source, HEADER_SIZE, 8, 12)
        );
    }

    #[test]
    fn test_decode_trailing_bytes() {
        let bytes = [b'I', b'N', 1, 1, 1, 0, 0, 0, 7, 9];
        let err = decode_tagged(&bytes).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedEncoding(_)));
    }

    #[test]
    fn test_empty_array() {
        let array = ScalarArray::Float32(Vec::new());
        let bytes = encode_tagged(&array, ByteOrder::LittleEndian).unwrap();
        assert_eq!(bytes.len(), HEADER_SIZE);
        assert!(is_tagged(&bytes));
        assert_eq!(decode_tagged(&bytes).unwrap(), array);
    }
}
